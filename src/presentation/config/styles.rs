use std::collections::HashMap;
use std::str::FromStr;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles, e.g. `"focused": "bold yellow on black"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(name, raw)| {
                parse_style(&raw)
                    .map(|style| (name, style))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Styles(styles))
    }
}

impl Styles {
    /// Style registered under `name`, or the terminal default
    pub fn style(&self, name: &str) -> Style {
        self.get(name).copied().unwrap_or_default()
    }
}

/// Parse `"[modifiers] [fg] [on [modifiers] bg]"`
pub fn parse_style(raw: &str) -> Result<Style, String> {
    let mut style = Style::default();
    let mut background = false;

    for token in raw.split_whitespace().map(str::to_ascii_lowercase) {
        match token.as_str() {
            "on" => background = true,
            "bold" => style = style.add_modifier(Modifier::BOLD),
            "dim" => style = style.add_modifier(Modifier::DIM),
            "italic" => style = style.add_modifier(Modifier::ITALIC),
            "underline" | "underlined" => style = style.add_modifier(Modifier::UNDERLINED),
            "reverse" | "reversed" | "inverse" => style = style.add_modifier(Modifier::REVERSED),
            color => {
                let color = Color::from_str(&color.replace("grey", "gray")).map_err(|_| {
                    format!("Unable to parse style `{raw}`: unknown color `{color}`")
                })?;
                style = if background {
                    style.bg(color)
                } else {
                    style.fg(color)
                };
            }
        }
    }

    Ok(style)
}
