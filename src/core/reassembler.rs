// src/core/reassembler.rs

//! Reconstruye argumentos lógicos a partir de tokens separados por espacios.
//!
//! Un valor de formato como `--pretty=format:%h by %an` llega partido en
//! `["--pretty=format:%h", "by", "%an"]` cuando no estaba entre comillas. Aquí
//! se vuelve a unir en un único argumento.

use crate::constants::FORMAT_PREFIXES;

/// Separa una línea en tokens por espacios en blanco. No interpreta comillas.
pub fn split_tokens(input: &str) -> Vec<String> {
    input.split_whitespace().map(String::from).collect()
}

/// Un argumento de formato que todavía está acumulando tokens.
struct PendingFormat {
    head: String,
    value: String,
}

impl PendingFormat {
    fn push(&mut self, token: &str) {
        self.value.push(' ');
        self.value.push_str(token);
    }

    fn finish(self) -> String {
        format!("{}{}", self.head, strip_matching_quotes(&self.value))
    }
}

/// Une los valores de formato partidos en varios tokens. Los demás tokens pasan sin cambios.
pub fn reassemble<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut logical = Vec::with_capacity(tokens.len());
    let mut pending: Option<PendingFormat> = None;

    for token in tokens {
        let token = token.as_ref();

        if let Some(mut format) = pending.take() {
            if !looks_like_option(token) {
                format.push(token);
                pending = Some(format);
                continue;
            }
            logical.push(format.finish());
        }

        match split_format_prefix(token) {
            Some((head, value)) => {
                pending = Some(PendingFormat {
                    head: head.to_string(),
                    value: value.to_string(),
                });
            }
            None => logical.push(token.to_string()),
        }
    }

    if let Some(format) = pending {
        logical.push(format.finish());
    }

    log::debug!("Argumentos reensamblados: {:?}", logical);
    logical
}

/// Devuelve `(cabecera hasta el primer ':', valor)` si el token es un argumento de formato.
fn split_format_prefix(token: &str) -> Option<(&str, &str)> {
    if !FORMAT_PREFIXES.iter().any(|prefix| token.starts_with(prefix)) {
        return None;
    }
    let colon = token.find(':')?;
    Some(token.split_at(colon + 1))
}

/// Un `-` suelto es texto (p. ej. `%h - %s`), no una opción.
fn looks_like_option(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-')
}

/// Quita un único nivel de comillas que envuelvan todo el valor.
fn strip_matching_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_arguments_pass_through() {
        assert_eq!(reassemble(&["log", "-n", "5"]), ["log", "-n", "5"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let empty: [&str; 0] = [];
        assert!(reassemble(&empty).is_empty());
    }

    #[test]
    fn split_format_value_is_joined_until_next_option() {
        let tokens = ["log", "--pretty=format:%h", "by", "%an", "-n", "5"];
        assert_eq!(
            reassemble(&tokens),
            ["log", "--pretty=format:%h by %an", "-n", "5"]
        );
    }

    #[test]
    fn format_value_at_end_is_flushed() {
        let tokens = ["log", "--pretty=format:%h", "on", "%ad"];
        assert_eq!(reassemble(&tokens), ["log", "--pretty=format:%h on %ad"]);
    }

    #[test]
    fn lone_dash_stays_inside_format_value() {
        let tokens = ["log", "--format=format:%h", "-", "%s", "--graph"];
        assert_eq!(
            reassemble(&tokens),
            ["log", "--format=format:%h - %s", "--graph"]
        );
    }

    #[test]
    fn consecutive_format_arguments_are_kept_apart() {
        let tokens = ["--pretty=format:%h", "x", "--pretty=tformat:%s", "y"];
        assert_eq!(
            reassemble(&tokens),
            ["--pretty=format:%h x", "--pretty=tformat:%s y"]
        );
    }

    #[test]
    fn surrounding_quotes_are_removed_once() {
        let tokens = ["log", "--pretty=format:\"%h", "%s\"", "-3"];
        assert_eq!(reassemble(&tokens), ["log", "--pretty=format:%h %s", "-3"]);

        let unbalanced = ["--pretty=format:'%h", "%s"];
        assert_eq!(reassemble(&unbalanced), ["--pretty=format:'%h %s"]);
    }

    #[test]
    fn output_never_longer_than_input() {
        let tokens = ["a", "--pretty=format:1", "2", "3", "-b", "c"];
        assert!(reassemble(&tokens).len() <= tokens.len());
    }

    #[test]
    fn other_pretty_values_are_not_merged() {
        let tokens = ["log", "--pretty=oneline", "HEAD", "main"];
        assert_eq!(reassemble(&tokens), tokens);
    }

    #[test]
    fn split_tokens_ignores_quotes_and_extra_spaces() {
        assert_eq!(
            split_tokens("  -n 5   \"a b\" "),
            ["-n", "5", "\"a", "b\""]
        );
        assert!(split_tokens("   ").is_empty());
    }
}
