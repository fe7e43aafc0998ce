//! Shared fixtures for integration tests.

#![allow(dead_code)]

use waypoint::{Fsm, FsmConfig};

pub const STUDENT_JSON: &str = r#"{
    "initial": "normal",
    "states": {
        "normal": {
            "transitions": { "study": "busy" }
        },
        "busy": {
            "transitions": { "get_tired": "sleeping", "get_hungry": "hungry" }
        },
        "hungry": {
            "transitions": { "eat": "normal" }
        },
        "sleeping": {
            "transitions": { "get_hungry": "hungry", "get_up": "normal" }
        }
    }
}"#;

pub const STUDENT_STATES: [&str; 4] = ["normal", "busy", "hungry", "sleeping"];

pub fn student_config() -> FsmConfig {
    FsmConfig::from_json(STUDENT_JSON).unwrap()
}

pub fn student() -> Fsm {
    Fsm::new(student_config())
}
