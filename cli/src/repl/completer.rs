use rustyline::completion::Pair;

pub fn complete_line(line: &str, pos: usize) -> (usize, Vec<Pair>) {
    let safe_pos = pos.min(line.len());
    let prefix = line.get(..safe_pos).unwrap_or(line);
    let start = word_start(prefix);
    let needle = &prefix[start..];

    let candidates = if start == 0 && needle.starts_with('.') {
        commands()
    } else {
        keywords()
    };
    let words = candidates
        .iter()
        .copied()
        .filter(|word| word.starts_with(needle))
        .collect::<Vec<_>>();

    (start, pairs(&words))
}

fn pairs(values: &[&str]) -> Vec<Pair> {
    values
        .iter()
        .map(|v| Pair {
            display: (*v).to_string(),
            replacement: (*v).to_string(),
        })
        .collect()
}

fn word_start(prefix: &str) -> usize {
    prefix
        .char_indices()
        .rev()
        .find(|(_, ch)| ch.is_whitespace())
        .map_or(0, |(idx, ch)| idx + ch.len_utf8())
}

fn commands() -> &'static [&'static str] {
    &[".help", ".load", ".split", ".exit"]
}

fn keywords() -> &'static [&'static str] {
    &[
        "MD5Version",
        "commandline",
        "numJoints",
        "numMeshes",
        "joints",
        "mesh",
        "shader",
        "numverts",
        "vert",
        "numtris",
        "tri",
        "numweights",
        "weight",
        "numFrames",
        "frameRate",
        "numAnimatedComponents",
        "hierarchy",
        "bounds",
        "baseframe",
        "frame",
    ]
}
