use std::{collections::HashMap, fmt::Debug};

use crossterm::event::KeyEvent;
use derive_deref::{Deref, DerefMut};
use serde::{de, de::DeserializeOwned, Deserialize, Deserializer};

use crate::config::keyparser::KeyParser;

/// Key sequences mapped to whatever they trigger. Written in the config file as
/// `{ "<ctrl-w><q>": ... }`.
#[derive(Clone, Debug, Deref, DerefMut)]
pub struct KeyBindings<T: PartialEq + DeserializeOwned + Debug>(pub HashMap<Vec<KeyEvent>, T>);

impl<T: PartialEq + DeserializeOwned + Debug> Default for KeyBindings<T> {
    fn default() -> Self {
        Self(HashMap::new())
    }
}

impl<'de, T: PartialEq + DeserializeOwned + Debug> Deserialize<'de> for KeyBindings<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, T>::deserialize(deserializer)?;
        let keybindings = parsed_map
            .into_iter()
            .map(|(keyseq, action)| {
                KeyParser::parse_key_sequence(&keyseq)
                    .map(|seq| (seq, action))
                    .map_err(<D::Error as de::Error>::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;
        Ok(KeyBindings(keybindings))
    }
}

impl<T: PartialEq + DeserializeOwned + Debug> KeyBindings<T> {
    /// Key sequence bound to `action`, printed like `<ctrl-w><q>`. When several sequences are
    /// bound, the shortest one wins.
    pub fn find_action_str(&self, action: &T) -> Option<String> {
        self.0
            .iter()
            .filter(|(_, val)| *val == action)
            .map(|(keys, _)| KeyParser::keyseq_to_string(keys))
            .min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::action::useraction::UserAction;

    #[test]
    fn test_deserialize() {
        let binds: KeyBindings<UserAction> = json5::from_str(
            r#"{ "<space>": "toggle_play", "<l>": { "jump": 10 }, "<ctrl-w><q>": "quit" }"#,
        )
        .unwrap();
        assert_eq!(binds.len(), 3);
        assert_eq!(
            binds.get(&vec![KeyEvent::new(KeyCode::Char('l'), KeyModifiers::empty())]),
            Some(&UserAction::Jump(10))
        );
        assert_eq!(
            binds.find_action_str(&UserAction::Quit),
            Some("<Ctrl-w><q>".to_string())
        );
        assert_eq!(binds.find_action_str(&UserAction::Refresh), None);
    }

    #[test]
    fn test_bad_key_is_an_error() {
        let res: Result<KeyBindings<UserAction>, _> =
            json5::from_str(r#"{ "<hyperspace>": "quit" }"#);
        assert!(res.is_err());
    }
}
