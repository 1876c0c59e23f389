/// Key holding the note text.
pub const NOTE_KEY: &str = "minhaNota";
/// Key holding the dark mode flag, stored as `"true"` or `"false"`.
pub const DARK_KEY: &str = "temaDark";
/// Key holding the background choice, empty when none is selected.
pub const BACKGROUND_KEY: &str = "cores";

pub fn encode_flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

pub fn decode_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Background {
    Blue,
    Yellow,
    Pink,
}

impl Background {
    pub const ALL: [Background; 3] = [Background::Blue, Background::Yellow, Background::Pink];

    pub fn as_str(self) -> &'static str {
        match self {
            Background::Blue => "azul",
            Background::Yellow => "amarelo",
            Background::Pink => "rosa",
        }
    }

    pub fn parse(raw: &str) -> Option<Background> {
        Self::ALL.into_iter().find(|b| b.as_str() == raw)
    }

    pub fn encode(choice: Option<Background>) -> &'static str {
        choice.map_or("", Background::as_str)
    }
}
