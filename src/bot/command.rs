use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Comandos disponibles:")]
pub enum Command {
    #[command(description = "Reiniciar.")]
    Start,
    #[command(description = "Lista de comandos.")]
    Ayuda,
    #[command(description = "Chiste aleatorio.")]
    Chiste,
    #[command(description = "Definición principal de una palabra en inglés.")]
    Definir(String),
    #[command(description = "Sinónimos de una palabra en inglés.")]
    Sinonimos(String),
    #[command(description = "Antónimos de una palabra en inglés.")]
    Antonimos(String),
}

/// Collapse the argument text the way a whitespace-split argument list
/// re-joined with single spaces would look. `None` when nothing is left.
pub fn normalize_args(args: &str) -> Option<String> {
    let word = args.split_whitespace().collect::<Vec<_>>().join(" ");
    if word.is_empty() { None } else { Some(word) }
}
