/// Tokens that can open a Solidity source file.
const SOLIDITY_STARTERS: &[&str] = &[
    "// SPDX-License-Identifier",
    "pragma ",
    "import ",
    "contract ",
    "abstract contract ",
    "library ",
    "interface ",
    "/**",
    "///",
];

/// Extract clean Solidity code from a model response.
///
/// When the response has several fenced blocks, the one tagged `solidity` (or
/// `sol`) wins, then the first block with a line that looks like Solidity, then
/// the first block. Leading commentary before the first Solidity line is
/// dropped. Returns an empty string when nothing is left.
pub fn extract_code(response: &str) -> String {
    let blocks = fenced_blocks(response);

    let text = if blocks.is_empty() {
        response.trim()
    } else {
        blocks
            .iter()
            .find(|(lang, _)| is_solidity_tag(lang))
            .or_else(|| blocks.iter().find(|(_, body)| first_code_line(body).is_some()))
            .unwrap_or(&blocks[0])
            .1
    };

    let lines: Vec<&str> = text.lines().collect();

    match first_code_line(text) {
        Some(0) | None => text.to_string(),
        Some(pos) => lines[pos..].join("\n").trim().to_string(),
    }
}

/// Return the body of the first fenced block, or the trimmed text if there is none.
///
/// The language tag after the opening fence (```solidity, ```tsx, ...) is dropped.
/// An unterminated block runs to the end of the text.
pub fn strip_fences(response: &str) -> String {
    match fenced_blocks(response).first() {
        Some((_, body)) => body.to_string(),
        None => response.trim().to_string(),
    }
}

/// Split a response into `(language tag, trimmed body)` pairs, one per fenced block.
fn fenced_blocks(text: &str) -> Vec<(&str, &str)> {
    let mut blocks = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find("```") {
        let after_open = &rest[open + 3..];
        let (lang, body) = match after_open.find('\n') {
            Some(newline) => (after_open[..newline].trim(), &after_open[newline + 1..]),
            None => ("", after_open),
        };

        match body.find("```") {
            Some(close) => {
                blocks.push((lang, body[..close].trim()));
                rest = &body[close + 3..];
            }
            None => {
                blocks.push((lang, body.trim()));
                break;
            }
        }
    }

    blocks
}

fn is_solidity_tag(lang: &str) -> bool {
    lang.eq_ignore_ascii_case("solidity") || lang.eq_ignore_ascii_case("sol")
}

fn first_code_line(text: &str) -> Option<usize> {
    text.lines().position(|line| {
        let line = line.trim_start();
        SOLIDITY_STARTERS
            .iter()
            .any(|starter| line.starts_with(starter))
    })
}
