/// Built-in candidate list, used when no `--word-list` file is given.
///
/// Entries may contain letters, digits, hyphens, and spaces, and vary in
/// length; the grid is sized per game from the selected secret.
pub const BUILTIN_WORDS: &[&str] = &[
    "kompact-92",
    "lc-10",
    "pp919",
    "kilo-141",
    "jackal-pdw",
    "grevokka",
    "ames-85",
    "ak74",
    "stimshot",
    "molotov",
    "semtex",
    "blackopps",
    "crimson",
    "nuketown",
    "dreadnaught",
    "kar98",
    "score streaks",
    "domination",
    "kill confirmed",
];
