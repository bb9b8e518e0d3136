use covgap::config::{ImpactTable, ScoringConfig, ScoringWeights};
use covgap::prioritize::{
    prioritize_batch, prioritize_json, rank, rank_with, score, Difficulty, Priority, Suggestion,
    SuggestionBatch,
};
use pretty_assertions::assert_eq;

const DMA_SUGGESTIONS: &str = r#"{
  "suggestions": [
    {
      "target_bin": "cg_transfer_size.cp_size.max[4096]",
      "priority": "High",
      "difficulty": "Medium",
      "suggestion": "Drive a transfer of exactly 4096 bytes.",
      "test_outline": ["Program length register to 4096.", "Start the channel.", "Check completion interrupt."],
      "dependencies": [],
      "reasoning": "Boundary size is never exercised."
    },
    {
      "target_bin": "cg_transfer_size.cp_burst_type.wrap",
      "priority": "Medium",
      "difficulty": "Easy",
      "suggestion": "Enable wrap bursts on a single channel.",
      "test_outline": ["Set burst type to wrap.", "Run a short transfer."],
      "dependencies": [],
      "reasoning": "Wrap mode has no stimulus."
    },
    {
      "target_bin": "cg_channel_arbitration.cp_active_channels.four_channels",
      "priority": "High",
      "difficulty": "Medium",
      "suggestion": "Start four channels concurrently.",
      "test_outline": ["Configure channels 0-3.", "Enable them in the same cycle."],
      "dependencies": [],
      "reasoning": "Arbitration with four requesters is untested."
    },
    {
      "target_bin": "cg_channel_arbitration.cp_active_channels.all_eight",
      "priority": "High",
      "difficulty": "Hard",
      "suggestion": "Saturate the arbiter with all eight channels.",
      "test_outline": ["Configure all channels.", "Enable together.", "Check fairness."],
      "dependencies": [],
      "reasoning": "Full load arbitration is untested."
    },
    {
      "target_bin": "cross_size_burst.small, wrap",
      "priority": "Medium",
      "difficulty": "Easy",
      "suggestion": "Small transfer with wrap bursts.",
      "test_outline": ["Small size.", "Wrap burst."],
      "dependencies": ["cg_transfer_size.cp_burst_type.wrap"],
      "reasoning": "Missing cross combination."
    },
    {
      "target_bin": "cross_size_burst.medium, wrap",
      "priority": "Medium",
      "difficulty": "Easy",
      "suggestion": "Medium transfer with wrap bursts.",
      "test_outline": ["Medium size.", "Wrap burst."],
      "dependencies": ["cg_transfer_size.cp_burst_type.wrap"],
      "reasoning": "Missing cross combination."
    },
    {
      "target_bin": "cross_size_burst.medium, fixed",
      "priority": "Medium",
      "difficulty": "Easy",
      "suggestion": "Medium transfer with fixed bursts.",
      "test_outline": ["Medium size.", "Fixed burst."],
      "dependencies": ["cg_transfer_size.cp_size.medium"],
      "reasoning": "Missing cross combination."
    }
  ]
}"#;

#[test]
fn test_dma_batch_order_and_scores() {
    let ranked = prioritize_json(DMA_SUGGESTIONS).unwrap();

    let got: Vec<(&str, f64)> = ranked
        .iter()
        .map(|r| (r.suggestion.target_bin.as_str(), r.priority_score))
        .collect();

    assert_eq!(
        got,
        vec![
            ("cg_transfer_size.cp_size.max[4096]", 4.45),
            ("cg_channel_arbitration.cp_active_channels.four_channels", 4.45),
            ("cg_channel_arbitration.cp_active_channels.all_eight", 4.4),
            ("cg_transfer_size.cp_burst_type.wrap", 2.6),
            ("cross_size_burst.small, wrap", 2.45),
            ("cross_size_burst.medium, wrap", 2.45),
            ("cross_size_burst.medium, fixed", 2.45),
        ]
    );
}

#[test]
fn test_ranking_preserves_free_text_fields() {
    let ranked = prioritize_json(DMA_SUGGESTIONS).unwrap();
    let top = &ranked[0].suggestion;
    assert_eq!(top.test_outline.len(), 3);
    assert_eq!(top.reasoning, "Boundary size is never exercised.");
}

#[test]
fn test_ranked_output_json_round_trip() {
    let ranked = prioritize_json(DMA_SUGGESTIONS).unwrap();
    let json = serde_json::to_string(&ranked).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value[0]["priority_score"], 4.45);
    assert_eq!(value[6]["dependencies"][0], "cg_transfer_size.cp_size.medium");
}

#[test]
fn test_unknown_labels_fall_back_to_defaults() {
    let sug = Suggestion::new("cg.cp.b", "Critical", "Trivial");
    assert_eq!(sug.priority, Priority::Other("Critical".into()));
    assert_eq!(sug.difficulty, Difficulty::Other("Trivial".into()));
    // impact 5, difficulty 2, independent
    assert_eq!(score(&sug), 2.45);

    let ranked = rank(vec![sug]);
    let value = serde_json::to_value(&ranked[0]).unwrap();
    assert_eq!(value["priority"], "Critical");
    assert_eq!(value["difficulty"], "Trivial");
}

#[test]
fn test_low_difficulty_scores_like_unknown() {
    let low = Suggestion::new("a", "High", "Low");
    let unknown = Suggestion::new("b", "High", "Whatever");
    assert_eq!(score(&low), score(&unknown));
}

#[test]
fn test_custom_weights_change_order() {
    let config = ScoringConfig {
        weights: ScoringWeights {
            impact: 0.0,
            difficulty: 1.0,
            dependency: 0.0,
        },
        ..ScoringConfig::default()
    };
    let ranked = rank_with(
        vec![
            Suggestion::new("hard", "High", "Hard"),
            Suggestion::new("easy", "Low", "Easy"),
        ],
        &config,
    );
    assert_eq!(ranked[0].suggestion.target_bin, "easy");
    assert_eq!(ranked[0].priority_score, 1.0);
}

#[test]
fn test_custom_impact_table() {
    let config = ScoringConfig {
        impact: ImpactTable {
            unknown: 0.0,
            ..ImpactTable::default()
        },
        ..ScoringConfig::default()
    };
    let ranked = prioritize_batch(
        SuggestionBatch {
            suggestions: vec![Suggestion::new("x", "Critical", "Easy")],
        },
        &config,
    );
    assert_eq!(ranked[0].priority_score, 0.6);
}
