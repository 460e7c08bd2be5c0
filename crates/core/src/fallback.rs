//! Deterministic ERC-20 contract used when the completion provider fails.
//!
//! The output only depends on the prompt: a token name is guessed from the
//! first word-like run in the prompt, a symbol is derived from the name, and
//! both are filled into a fixed contract skeleton.

use regex::Regex;
use std::sync::LazyLock;

/// Name used when the prompt contains nothing that looks like a word.
pub const DEFAULT_NAME: &str = "VibeCoin";

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9_-]{1,20}").expect("valid name regex"));

static ELEMENTARY_TYPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(u?int|bytes|u?fixed)\d*(x\d+)?$").expect("valid elementary type regex")
});

/// Keywords, reserved words, units and globals that cannot name the contract.
const RESERVED: &[&str] = &[
    // keywords
    "abstract", "address", "anonymous", "as", "assembly", "bool", "break", "byte", "calldata",
    "catch", "constant", "constructor", "continue", "contract", "delete", "do", "else", "emit",
    "enum", "error", "event", "external", "fallback", "false", "for", "function", "global", "hex",
    "if", "immutable", "import", "indexed", "interface", "internal", "is", "layout", "library",
    "mapping", "memory", "modifier", "new", "override", "payable", "pragma", "private", "public",
    "pure", "receive", "return", "returns", "revert", "storage", "string", "struct", "super",
    "this", "throw", "transient", "true", "try", "type", "unchecked", "unicode", "using", "view",
    "virtual", "while",
    // reserved for future use
    "after", "alias", "apply", "auto", "case", "copyof", "default", "define", "final",
    "implements", "in", "inline", "let", "macro", "match", "mutable", "null", "of", "partial",
    "promise", "reference", "relocatable", "sealed", "sizeof", "static", "supports", "switch",
    "typedef", "typeof", "var",
    // ether and time units
    "wei", "gwei", "ether", "szabo", "finney", "seconds", "minutes", "hours", "days", "weeks",
    "years",
    // globals
    "abi", "block", "msg", "tx", "now", "require", "assert", "selfdestruct", "suicide",
    "keccak256", "sha256", "sha3", "ripemd160", "ecrecover", "addmod", "mulmod", "gasleft",
    "blockhash",
];

/// Members declared by the template itself.
const TEMPLATE_MEMBERS: &[&str] = &[
    "name", "symbol", "decimals", "totalSupply", "balanceOf", "allowance", "Transfer",
    "Approval", "transfer", "approve", "transferFrom", "initialSupply",
];

const TEMPLATE: &str = r#"// SPDX-License-Identifier: MIT
pragma solidity ^0.8.0;

/// @title __NAME__ (__SYMBOL__) - fallback ERC20
contract __IDENT__ {
    string public name = "__NAME__";
    string public symbol = "__SYMBOL__";
    uint8 public decimals = 18;
    uint256 public totalSupply;
    mapping(address => uint256) public balanceOf;
    mapping(address => mapping(address => uint256)) public allowance;
    event Transfer(address indexed from, address indexed to, uint256 value);
    event Approval(address indexed owner, address indexed spender, uint256 value);
    constructor(uint256 initialSupply) {
        totalSupply = initialSupply * (10 ** uint256(decimals));
        balanceOf[msg.sender] = totalSupply;
        emit Transfer(address(0), msg.sender, totalSupply);
    }
    function transfer(address to, uint256 value) public returns (bool) {
        require(balanceOf[msg.sender] >= value, "insufficient balance");
        balanceOf[msg.sender] -= value;
        balanceOf[to] += value;
        emit Transfer(msg.sender, to, value);
        return true;
    }
    function approve(address spender, uint256 value) public returns (bool) {
        allowance[msg.sender][spender] = value;
        emit Approval(msg.sender, spender, value);
        return true;
    }
    function transferFrom(address from, address to, uint256 value) public returns (bool) {
        require(balanceOf[from] >= value, "insufficient balance");
        require(allowance[from][msg.sender] >= value, "allowance exceeded");
        allowance[from][msg.sender] -= value;
        balanceOf[from] -= value;
        balanceOf[to] += value;
        emit Transfer(from, to, value);
        return true;
    }
}
"#;

/// Guess a token name from the prompt.
///
/// Takes the first run of a letter followed by 1 to 20 letters, digits,
/// hyphens or underscores. Falls back to [`DEFAULT_NAME`].
pub fn candidate_name(prompt: &str) -> &str {
    NAME_REGEX
        .find(prompt)
        .map(|m| m.as_str())
        .unwrap_or(DEFAULT_NAME)
}

/// Derive a 1-3 character symbol from a token name.
///
/// Uses the uppercase letters of the name; when there are none, the first
/// character of the name, uppercased.
pub fn derive_symbol(name: &str) -> String {
    let capitals: String = name
        .chars()
        .filter(|c| c.is_ascii_uppercase())
        .take(3)
        .collect();

    if !capitals.is_empty() {
        return capitals;
    }

    name.chars()
        .next()
        .map(|c| c.to_ascii_uppercase().to_string())
        .unwrap_or_else(|| "V".to_string())
}

/// Turn a token name into a valid contract identifier.
pub fn contract_identifier(name: &str) -> String {
    let ident = name.replace('-', "_");

    if is_reserved(&ident) {
        format!("{ident}Token")
    } else {
        ident
    }
}

fn is_reserved(ident: &str) -> bool {
    RESERVED.contains(&ident)
        || TEMPLATE_MEMBERS.contains(&ident)
        || ELEMENTARY_TYPE_REGEX.is_match(ident)
}

/// Generate the fallback ERC-20 contract for a prompt.
pub fn generate_erc20(prompt: &str) -> String {
    let name = candidate_name(prompt);
    let symbol = derive_symbol(name);
    let ident = contract_identifier(name);

    TEMPLATE
        .replace("__IDENT__", &ident)
        .replace("__SYMBOL__", &symbol)
        .replace("__NAME__", name)
}
