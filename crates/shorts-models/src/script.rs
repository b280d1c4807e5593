//! Script generation results.

use serde::{Deserialize, Serialize};

/// Output of the script generation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptResult {
    /// The complete narrated script.
    pub script_text: String,
    /// Descriptive visual prompts, one per intended scene.
    ///
    /// The generator is asked for 5-7 prompts but the list may come back
    /// shorter, longer, or empty; downstream normalization fixes the count.
    #[serde(alias = "visual_keywords")]
    pub visual_prompts: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_result_deserializes_service_payload() {
        let json = r#"{
            "script_text": "Today we look at the future of silicon.",
            "visual_prompts": [
                "a futuristic glowing microchip close up",
                "a cyberpunk city skyline at night"
            ]
        }"#;

        let result: ScriptResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.visual_prompts.len(), 2);
        assert_eq!(
            result.visual_prompts[0],
            "a futuristic glowing microchip close up"
        );
    }
}
