use super::types::CompletionRequest;

/// System message used when generating the frontend snippet.
pub const FRONTEND_PREAMBLE: &str = "\
You are an expert React and Web3 developer.
Generate a modern React component using TypeScript, hooks and ethers.js v6 that interacts with the given smart contract.

Rules:
- Output raw React/TypeScript code only. No markdown fences. No explanations.
- Include the necessary imports and proper TypeScript types.
- Connect through the browser wallet (window.ethereum) and expose one control per public contract function.
- Use Tailwind CSS classes for styling.";

/// Build the contract generation prompt.
///
/// The user's request is embedded verbatim between double quotes; it is not
/// escaped.
pub fn build_contract_prompt(prompt: &str) -> CompletionRequest {
    let instruction = format!(
        "You are an expert-level, security-audited Solidity smart contract developer.
Your sole task is to take a user's request and write a complete, secure, and well-commented Solidity smart contract that fulfills that request.

CRITICAL INSTRUCTIONS:
1. Your output MUST be ONLY the Solidity code. Do not include any explanation, greeting, or any text before or after the code block.
2. The code must be complete and immediately deployable.
3. It MUST start with \"// SPDX-License-Identifier: MIT\" and include a recent pragma line (e.g., \"pragma solidity ^0.8.20;\").

User's Request: \"{prompt}\""
    );

    CompletionRequest::user(instruction)
}

/// Build the frontend generation prompt for an already generated contract.
pub fn build_frontend_prompt(prompt: &str, contract: &str) -> CompletionRequest {
    let instruction = format!(
        "Generate a React frontend component that interacts with this smart contract:\n\n{contract}\n\nOriginal request: {prompt}"
    );

    CompletionRequest::with_preamble(FRONTEND_PREAMBLE, instruction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_prompt_embeds_request_verbatim() {
        let request = build_contract_prompt("a token called \"Moon\"");

        assert!(request.preamble.is_none());
        assert!(request
            .prompt
            .ends_with("User's Request: \"a token called \"Moon\"\""));
    }

    #[test]
    fn test_contract_prompt_demands_license_and_pragma() {
        let request = build_contract_prompt("anything");

        assert!(request
            .prompt
            .contains("\"// SPDX-License-Identifier: MIT\""));
        assert!(request.prompt.contains("pragma solidity ^0.8.20;"));
        assert!(request.prompt.contains("ONLY the Solidity code"));
    }

    #[test]
    fn test_frontend_prompt_carries_contract_and_request() {
        let request = build_frontend_prompt("a voting dApp", "contract Ballot {}");

        assert_eq!(request.preamble.as_deref(), Some(FRONTEND_PREAMBLE));
        assert!(request.prompt.contains("\n\ncontract Ballot {}\n\n"));
        assert!(request.prompt.ends_with("Original request: a voting dApp"));
    }
}
