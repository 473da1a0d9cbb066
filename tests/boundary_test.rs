use gitver::boundary::BoundaryWarning;

#[test]
fn test_boundary_warning_untagged_tree_display() {
    let warning = BoundaryWarning::UntaggedTree {
        describe: "gabcdef1".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("No version tag"),
        "Message should mention the missing tag, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("gabcdef1"),
        "Message should contain the describe string 'gabcdef1', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("fallback"),
        "Message should mention the fallback, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_timestamp_unavailable_display() {
    let warning = BoundaryWarning::TimestampUnavailable {
        describe: "v1.0.0-dirty".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("timestamp"),
        "Message should mention the timestamp, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("v1.0.0-dirty"),
        "Message should contain the describe string 'v1.0.0-dirty', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("current time"),
        "Message should mention the current-time fallback, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warnings_are_comparable() {
    let a = BoundaryWarning::UntaggedTree {
        describe: "gabcdef1".to_string(),
    };
    let b = BoundaryWarning::UntaggedTree {
        describe: "gabcdef1".to_string(),
    };
    assert_eq!(a, b);
}
