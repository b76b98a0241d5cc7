use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key names accepted in bindings, and how they are printed back.
const NAMED_KEYS: [(&str, KeyCode, &str); 20] = [
    ("esc", KeyCode::Esc, "Esc"),
    ("enter", KeyCode::Enter, "Enter"),
    ("left", KeyCode::Left, "Left"),
    ("right", KeyCode::Right, "Right"),
    ("up", KeyCode::Up, "Up"),
    ("down", KeyCode::Down, "Down"),
    ("home", KeyCode::Home, "Home"),
    ("end", KeyCode::End, "End"),
    ("pageup", KeyCode::PageUp, "PageUp"),
    ("pagedown", KeyCode::PageDown, "PageDown"),
    ("backtab", KeyCode::BackTab, "Backtab"),
    ("backspace", KeyCode::Backspace, "Backspace"),
    ("delete", KeyCode::Delete, "Delete"),
    ("insert", KeyCode::Insert, "Insert"),
    ("tab", KeyCode::Tab, "Tab"),
    ("space", KeyCode::Char(' '), "Space"),
    ("minus", KeyCode::Char('-'), "-"),
    ("hyphen", KeyCode::Char('-'), "-"),
    ("lt", KeyCode::Char('<'), "lt"),
    ("gt", KeyCode::Char('>'), "gt"),
];

const MODIFIERS: [(&str, KeyModifiers, &str); 3] = [
    ("ctrl-", KeyModifiers::CONTROL, "Ctrl"),
    ("alt-", KeyModifiers::ALT, "Alt"),
    ("shift-", KeyModifiers::SHIFT, "Shift"),
];

pub struct KeyParser {}

impl KeyParser {
    pub fn key_event_to_string(key_event: &KeyEvent) -> String {
        let code = match key_event.code {
            KeyCode::F(n) => format!("F{}", n),
            KeyCode::Char(c) if c != ' ' && c != '-' && c != '<' && c != '>' => c.to_string(),
            code => NAMED_KEYS
                .iter()
                .find(|(_, k, _)| *k == code)
                .map(|(_, _, shown)| shown.to_string())
                .unwrap_or_default(),
        };
        let mut parts: Vec<&str> = MODIFIERS
            .iter()
            .filter(|(_, m, _)| key_event.modifiers.intersects(*m))
            .map(|(_, _, shown)| *shown)
            .collect();
        parts.push(&code);
        parts.join("-")
    }

    /// `<Ctrl-c><q>` style rendering of a whole sequence.
    pub fn keyseq_to_string(keyseq: &[KeyEvent]) -> String {
        keyseq
            .iter()
            .map(|k| format!("<{}>", Self::key_event_to_string(k)))
            .collect()
    }

    fn parse_key_code(raw: &str, mut modifiers: KeyModifiers) -> Result<KeyEvent, String> {
        if let Some((_, code, _)) = NAMED_KEYS.iter().find(|(name, _, _)| *name == raw) {
            if *code == KeyCode::BackTab {
                modifiers.insert(KeyModifiers::SHIFT);
            }
            return Ok(KeyEvent::new(*code, modifiers));
        }
        if let Some(n) = raw.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            if (1..=12).contains(&n) {
                return Ok(KeyEvent::new(KeyCode::F(n), modifiers));
            }
        }
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                // Terminals report `R` as shift-R
                if c.is_ascii_uppercase() {
                    modifiers.insert(KeyModifiers::SHIFT);
                }
                let c = if modifiers.contains(KeyModifiers::SHIFT) {
                    c.to_ascii_uppercase()
                } else {
                    c
                };
                Ok(KeyEvent::new(KeyCode::Char(c), modifiers))
            }
            _ => Err(format!("Unable to parse {raw}")),
        }
    }

    fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
        let mut modifiers = KeyModifiers::empty();
        let mut current = raw;
        'outer: loop {
            for (prefix, m, _) in MODIFIERS {
                if let Some(rest) = current.strip_prefix(prefix) {
                    modifiers.insert(m);
                    current = rest;
                    continue 'outer;
                }
            }
            break;
        }
        (current, modifiers)
    }

    /// Parses a single key such as `ctrl-a`, `enter` or `f5`. Case does not matter, except that
    /// a lone uppercase letter is kept as is.
    pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
        let lower = raw.to_ascii_lowercase();
        let (rest, modifiers) = Self::extract_modifiers(&lower);
        // `A` and `a` are different keys
        if rest.len() == 1 {
            return Self::parse_key_code(&raw[raw.len() - 1..], modifiers);
        }
        Self::parse_key_code(rest, modifiers)
    }

    /// Parses `<ctrl-w><q>`, or a single key with or without brackets.
    pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
        let trimmed = raw.trim();
        if trimmed.matches('<').count() != trimmed.matches('>').count() {
            return Err(format!("Unable to parse `{}`", raw));
        }
        let inner = trimmed
            .strip_prefix('<')
            .and_then(|s| s.strip_suffix('>'))
            .unwrap_or(trimmed);
        if inner.is_empty() {
            return Err(format!("Unable to parse `{}`", raw));
        }
        inner.split("><").map(Self::parse_key_event).collect()
    }
}
