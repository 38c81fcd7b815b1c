//! Static MarkdownV2 texts that do not depend on an API call.

use crate::markdown::escape;

pub const HELP: &str = r"📚 *Comandos Disponibles*:

*DICCIONARIO*:
`/definir <palabra>` \- Definición principal\.
Te ayuda a definir una palabra en inglés\.
Esto ayuda a ampliar tu vocabulario en tu segundo idioma\.

`/sinonimos <palabra>` \- Ver sinónimos\.
`/antonimos <palabra>` \- Ver antónimos\.
Para palabras en inglés\.

*EXTRAS*:
`/chiste` \- Chiste aleatorio\.
`/start` \- Reiniciar\.
`/ayuda` \- Esta lista\.";

pub const SEARCHING_JOKE: &str = r"Buscando un chiste\.\.\. ⏳";

/// The user who sent a command, as far as the greeting needs to know.
#[derive(Debug, Clone)]
pub struct Sender {
    pub id: u64,
    pub first_name: String,
}

pub fn start(sender: Option<&Sender>) -> String {
    let greeting = match sender {
        Some(sender) => format!(
            "¡Hola [{}](tg://user?id={})\\!",
            escape(&sender.first_name),
            sender.id
        ),
        None => "¡Hola\\!".to_string(),
    };
    format!("{greeting} Soy tu Bot de consulta\\. Usa /ayuda para ver mis comandos\\.")
}

pub fn usage(command: &str) -> String {
    format!("Uso: `/{command} <palabra>`\\.")
}

/// Plain text, sent without a parse mode.
pub fn echo(text: &str) -> String {
    format!("Dijiste: {text}")
}
