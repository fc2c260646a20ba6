use super::{PresetInfo, PresetKey};

pub const INFO: PresetInfo = PresetInfo {
    id: "us-ansi",
    name: "US ANSI Compact",
    description: "US ANSI compact keyboard layout without the F-key row",
    language: "en",
    region: "US",
    layout_type: "ANSI",
    author: "Wogikaze",
    tags: &["US", "ANSI", "Compact"],
};

#[rustfmt::skip]
pub const KEYS: &[PresetKey] = &[
    ("esc", 0.0, 0.0, 1.0, 1.0, "Escape", "Esc", "Esc"),
    ("key1", 1.0, 0.0, 1.0, 1.0, "Digit1", "1", "!"),
    ("key2", 2.0, 0.0, 1.0, 1.0, "Digit2", "2", "@"),
    ("key3", 3.0, 0.0, 1.0, 1.0, "Digit3", "3", "#"),
    ("key4", 4.0, 0.0, 1.0, 1.0, "Digit4", "4", "$"),
    ("key5", 5.0, 0.0, 1.0, 1.0, "Digit5", "5", "%"),
    ("key6", 6.0, 0.0, 1.0, 1.0, "Digit6", "6", "^"),
    ("key7", 7.0, 0.0, 1.0, 1.0, "Digit7", "7", "&"),
    ("key8", 8.0, 0.0, 1.0, 1.0, "Digit8", "8", "*"),
    ("key9", 9.0, 0.0, 1.0, 1.0, "Digit9", "9", "("),
    ("key0", 10.0, 0.0, 1.0, 1.0, "Digit0", "0", ")"),
    ("minus", 11.0, 0.0, 1.0, 1.0, "Minus", "-", "_"),
    ("equal", 12.0, 0.0, 1.0, 1.0, "Equal", "=", "+"),
    ("backspace", 13.0, 0.0, 2.0, 1.0, "Backspace", "Backspace", "Backspace"),
    ("tab", 0.0, 1.0, 1.5, 1.0, "Tab", "Tab", "Tab"),
    ("q", 1.5, 1.0, 1.0, 1.0, "KeyQ", "q", "Q"),
    ("w", 2.5, 1.0, 1.0, 1.0, "KeyW", "w", "W"),
    ("e", 3.5, 1.0, 1.0, 1.0, "KeyE", "e", "E"),
    ("r", 4.5, 1.0, 1.0, 1.0, "KeyR", "r", "R"),
    ("t", 5.5, 1.0, 1.0, 1.0, "KeyT", "t", "T"),
    ("y", 6.5, 1.0, 1.0, 1.0, "KeyY", "y", "Y"),
    ("u", 7.5, 1.0, 1.0, 1.0, "KeyU", "u", "U"),
    ("i", 8.5, 1.0, 1.0, 1.0, "KeyI", "i", "I"),
    ("o", 9.5, 1.0, 1.0, 1.0, "KeyO", "o", "O"),
    ("p", 10.5, 1.0, 1.0, 1.0, "KeyP", "p", "P"),
    ("bracket_left", 11.5, 1.0, 1.0, 1.0, "BracketLeft", "[", "{"),
    ("bracket_right", 12.5, 1.0, 1.0, 1.0, "BracketRight", "]", "}"),
    ("backslash", 13.5, 1.0, 1.5, 1.0, "Backslash", "\\", "|"),
    ("caps", 0.0, 2.0, 1.75, 1.0, "CapsLock", "Caps", "Caps"),
    ("a", 1.75, 2.0, 1.0, 1.0, "KeyA", "a", "A"),
    ("s", 2.75, 2.0, 1.0, 1.0, "KeyS", "s", "S"),
    ("d", 3.75, 2.0, 1.0, 1.0, "KeyD", "d", "D"),
    ("f", 4.75, 2.0, 1.0, 1.0, "KeyF", "f", "F"),
    ("g", 5.75, 2.0, 1.0, 1.0, "KeyG", "g", "G"),
    ("h", 6.75, 2.0, 1.0, 1.0, "KeyH", "h", "H"),
    ("j", 7.75, 2.0, 1.0, 1.0, "KeyJ", "j", "J"),
    ("k", 8.75, 2.0, 1.0, 1.0, "KeyK", "k", "K"),
    ("l", 9.75, 2.0, 1.0, 1.0, "KeyL", "l", "L"),
    ("semicolon", 10.75, 2.0, 1.0, 1.0, "Semicolon", ";", ":"),
    ("quote", 11.75, 2.0, 1.0, 1.0, "Quote", "'", "\""),
    ("enter", 12.75, 2.0, 2.25, 1.0, "Enter", "Enter", "Enter"),
    ("shift_left", 0.0, 3.0, 2.25, 1.0, "ShiftLeft", "Shift", "Shift"),
    ("z", 2.25, 3.0, 1.0, 1.0, "KeyZ", "z", "Z"),
    ("x", 3.25, 3.0, 1.0, 1.0, "KeyX", "x", "X"),
    ("c", 4.25, 3.0, 1.0, 1.0, "KeyC", "c", "C"),
    ("v", 5.25, 3.0, 1.0, 1.0, "KeyV", "v", "V"),
    ("b", 6.25, 3.0, 1.0, 1.0, "KeyB", "b", "B"),
    ("n", 7.25, 3.0, 1.0, 1.0, "KeyN", "n", "N"),
    ("m", 8.25, 3.0, 1.0, 1.0, "KeyM", "m", "M"),
    ("comma", 9.25, 3.0, 1.0, 1.0, "Comma", ",", "<"),
    ("period", 10.25, 3.0, 1.0, 1.0, "Period", ".", ">"),
    ("slash", 11.25, 3.0, 1.0, 1.0, "Slash", "/", "?"),
    ("shift_right", 12.25, 3.0, 2.75, 1.0, "ShiftRight", "Shift", "Shift"),
    ("ctrl_left", 0.0, 4.0, 1.25, 1.0, "ControlLeft", "Ctrl", "Ctrl"),
    ("win_left", 1.25, 4.0, 1.25, 1.0, "MetaLeft", "Win", "Win"),
    ("alt_left", 2.5, 4.0, 1.25, 1.0, "AltLeft", "Alt", "Alt"),
    ("space", 3.75, 4.0, 6.25, 1.0, "Space", "Space", "Space"),
    ("alt_right", 10.0, 4.0, 1.25, 1.0, "AltRight", "Alt", "Alt"),
    ("fn", 11.25, 4.0, 1.25, 1.0, "Fn", "Fn", "Fn"),
    ("menu", 12.5, 4.0, 1.25, 1.0, "ContextMenu", "Menu", "Menu"),
    ("ctrl_right", 13.75, 4.0, 1.25, 1.0, "ControlRight", "Ctrl", "Ctrl"),
];
