use super::{PresetInfo, PresetKey};

pub const INFO: PresetInfo = PresetInfo {
    id: "jis-full",
    name: "JIS Full",
    description: "Japanese JIS full keyboard layout with F-keys",
    language: "ja",
    region: "JP",
    layout_type: "JIS",
    author: "User",
    tags: &["JIS", "Japanese", "Full-size", "F-keys"],
};

#[rustfmt::skip]
pub const KEYS: &[PresetKey] = &[
    ("esc", 0.0, 0.0, 1.0, 1.0, "Escape", "Esc", "Esc"),
    ("f1", 1.0, 0.0, 1.0, 1.0, "F1", "F1", "F1"),
    ("f2", 2.0, 0.0, 1.0, 1.0, "F2", "F2", "F2"),
    ("f3", 3.0, 0.0, 1.0, 1.0, "F3", "F3", "F3"),
    ("f4", 4.0, 0.0, 1.0, 1.0, "F4", "F4", "F4"),
    ("f5", 5.0, 0.0, 1.0, 1.0, "F5", "F5", "F5"),
    ("f6", 6.0, 0.0, 1.0, 1.0, "F6", "F6", "F6"),
    ("f7", 7.0, 0.0, 1.0, 1.0, "F7", "F7", "F7"),
    ("f8", 8.0, 0.0, 1.0, 1.0, "F8", "F8", "F8"),
    ("f9", 9.0, 0.0, 1.0, 1.0, "F9", "F9", "F9"),
    ("f10", 10.0, 0.0, 1.0, 1.0, "F10", "F10", "F10"),
    ("f11", 11.0, 0.0, 1.0, 1.0, "F11", "F11", "F11"),
    ("f12", 12.0, 0.0, 1.0, 1.0, "F12", "F12", "F12"),
    ("backslash_top", 13.0, 0.0, 1.0, 1.0, "IntlRo", "\\", "_"),
    ("delete", 14.0, 0.0, 1.0, 1.0, "Delete", "Del", "Del"),
    ("hankaku_zenkaku", 0.0, 1.5, 1.0, 1.0, "IntlHalfFullWidth", "半角n全角", "半角n全角"),
    ("key1", 1.0, 1.5, 1.0, 1.0, "Digit1", "1", "!"),
    ("key2", 2.0, 1.5, 1.0, 1.0, "Digit2", "2", "\""),
    ("key3", 3.0, 1.5, 1.0, 1.0, "Digit3", "3", "#"),
    ("key4", 4.0, 1.5, 1.0, 1.0, "Digit4", "4", "$"),
    ("key5", 5.0, 1.5, 1.0, 1.0, "Digit5", "5", "%"),
    ("key6", 6.0, 1.5, 1.0, 1.0, "Digit6", "6", "&"),
    ("key7", 7.0, 1.5, 1.0, 1.0, "Digit7", "7", "'"),
    ("key8", 8.0, 1.5, 1.0, 1.0, "Digit8", "8", "("),
    ("key9", 9.0, 1.5, 1.0, 1.0, "Digit9", "9", ")"),
    ("key0", 10.0, 1.5, 1.0, 1.0, "Digit0", "0", ""),
    ("minus", 11.0, 1.5, 1.0, 1.0, "Minus", "-", "="),
    ("caret", 12.0, 1.5, 1.0, 1.0, "Equal", "^", "~"),
    ("backspace", 13.0, 1.5, 2.0, 1.0, "Backspace", "BS", "BS"),
    ("tab", 0.0, 2.5, 1.5, 1.0, "Tab", "Tab", "Tab"),
    ("q", 1.5, 2.5, 1.0, 1.0, "KeyQ", "q", "Q"),
    ("w", 2.5, 2.5, 1.0, 1.0, "KeyW", "w", "W"),
    ("e", 3.5, 2.5, 1.0, 1.0, "KeyE", "e", "E"),
    ("r", 4.5, 2.5, 1.0, 1.0, "KeyR", "r", "R"),
    ("t", 5.5, 2.5, 1.0, 1.0, "KeyT", "t", "T"),
    ("y", 6.5, 2.5, 1.0, 1.0, "KeyY", "y", "Y"),
    ("u", 7.5, 2.5, 1.0, 1.0, "KeyU", "u", "U"),
    ("i", 8.5, 2.5, 1.0, 1.0, "KeyI", "i", "I"),
    ("o", 9.5, 2.5, 1.0, 1.0, "KeyO", "o", "O"),
    ("p", 10.5, 2.5, 1.0, 1.0, "KeyP", "p", "P"),
    ("at", 11.5, 2.5, 1.0, 1.0, "BracketLeft", "@", "`"),
    ("bracket_left", 12.5, 2.5, 1.0, 1.0, "BracketRight", "[", "{"),
    ("enter", 13.75, 2.5, 1.25, 2.0, "Enter", "Enter", "Enter"),
    ("caps", 0.0, 3.5, 1.75, 1.0, "CapsLock", "Caps", "Caps"),
    ("a", 1.75, 3.5, 1.0, 1.0, "KeyA", "a", "A"),
    ("s", 2.75, 3.5, 1.0, 1.0, "KeyS", "s", "S"),
    ("d", 3.75, 3.5, 1.0, 1.0, "KeyD", "d", "D"),
    ("f", 4.75, 3.5, 1.0, 1.0, "KeyF", "f", "F"),
    ("g", 5.75, 3.5, 1.0, 1.0, "KeyG", "g", "G"),
    ("h", 6.75, 3.5, 1.0, 1.0, "KeyH", "h", "H"),
    ("j", 7.75, 3.5, 1.0, 1.0, "KeyJ", "j", "J"),
    ("k", 8.75, 3.5, 1.0, 1.0, "KeyK", "k", "K"),
    ("l", 9.75, 3.5, 1.0, 1.0, "KeyL", "l", "L"),
    ("semicolon", 10.75, 3.5, 1.0, 1.0, "Semicolon", ";", "+"),
    ("colon", 11.75, 3.5, 1.0, 1.0, "Quote", ":", "*"),
    ("bracket_right", 12.75, 3.5, 1.0, 1.0, "Backslash", "]", "}"),
    ("shift_left", 0.0, 4.5, 2.25, 1.0, "ShiftLeft", "Shift", "Shift"),
    ("z", 2.25, 4.5, 1.0, 1.0, "KeyZ", "z", "Z"),
    ("x", 3.25, 4.5, 1.0, 1.0, "KeyX", "x", "X"),
    ("c", 4.25, 4.5, 1.0, 1.0, "KeyC", "c", "C"),
    ("v", 5.25, 4.5, 1.0, 1.0, "KeyV", "v", "V"),
    ("b", 6.25, 4.5, 1.0, 1.0, "KeyB", "b", "B"),
    ("n", 7.25, 4.5, 1.0, 1.0, "KeyN", "n", "N"),
    ("m", 8.25, 4.5, 1.0, 1.0, "KeyM", "m", "M"),
    ("comma", 9.25, 4.5, 1.0, 1.0, "Comma", ",", "<"),
    ("period", 10.25, 4.5, 1.0, 1.0, "Period", ".", ">"),
    ("slash", 11.25, 4.5, 1.0, 1.0, "Slash", "/", "?"),
    ("backslash_jis", 12.25, 4.5, 1.0, 1.0, "IntlRo", "\\", "_"),
    ("shift_right", 13.25, 4.5, 1.75, 1.0, "ShiftRight", "Shift", "Shift"),
    ("ctrl_left", 0.0, 5.5, 1.5, 1.0, "ControlLeft", "Ctrl", "Ctrl"),
    ("fn", 1.5, 5.5, 1.0, 1.0, "Fn", "Fn", "Fn"),
    ("win_left", 2.5, 5.5, 1.0, 1.0, "MetaLeft", "Win", "Win"),
    ("alt_left", 3.5, 5.5, 1.0, 1.0, "AltLeft", "Alt", "Alt"),
    ("muhenkan", 4.5, 5.5, 1.0, 1.0, "NonConvert", "無変換", "無変換"),
    ("space", 5.5, 5.5, 4.0, 1.0, "Space", "Space", "Space"),
    ("henkan", 9.5, 5.5, 1.0, 1.0, "Convert", "変換", "変換"),
    ("katakana", 10.5, 5.5, 1.0, 1.0, "KanaMode", "カタnひら", "カタnひら"),
    ("alt_right", 11.5, 5.5, 1.0, 1.0, "AltRight", "Alt", "Alt"),
    ("menu", 12.5, 5.5, 1.0, 1.0, "ContextMenu", "Menu", "Menu"),
    ("ctrl_right", 13.5, 5.5, 1.5, 1.0, "ControlRight", "Ctrl", "Ctrl"),
];
