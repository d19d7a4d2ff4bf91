//! Scenario fixtures for CLI tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A share sheet: three mail apps, a gated camera app, a low-priority
/// fallback and an app in another profile.
pub const SHARE_SCENARIO: &str = r#"{
    "target": { "action": "android.intent.action.SEND", "mime_type": "text/plain" },
    "intents": [
        { "action": "android.intent.action.SEND", "mime_type": "text/plain" },
        { "action": "android.intent.action.SEND_MULTIPLE", "mime_type": "text/plain" }
    ],
    "settings": { "launched_from_uid": 10050, "referrer_package": "com.share" },
    "resolutions": {
        "android.intent.action.SEND": [
            { "activity_info": { "name": "com.mail.Compose", "package_name": "com.mail",
                                 "application_info": { "uid": 10100 } },
              "priority": 0, "is_default": true, "match_quality": 1081344,
              "filter": { "actions": ["android.intent.action.SEND"] } },
            { "activity_info": { "name": "com.chat.Share", "package_name": "com.chat",
                                 "application_info": { "uid": 10101 } },
              "priority": 0, "is_default": true },
            { "activity_info": { "name": "com.camera.Upload", "package_name": "com.camera",
                                 "permission": "android.permission.CAMERA",
                                 "application_info": { "uid": 10102 } },
              "priority": 0, "is_default": true },
            { "activity_info": { "name": "com.notes.Save", "package_name": "com.notes",
                                 "application_info": { "uid": 10103 } },
              "priority": 0, "is_default": true },
            { "activity_info": { "name": "com.work.Mail", "package_name": "com.work",
                                 "application_info": { "uid": 1010104 } },
              "priority": 0, "is_default": true, "target_user_id": 10 },
            { "activity_info": { "name": "com.fallback.Any", "package_name": "com.fallback",
                                 "application_info": { "uid": 10105 } },
              "priority": -10, "is_default": true }
        ],
        "android.intent.action.SEND_MULTIPLE": [
            { "activity_info": { "name": "com.mail.Compose", "package_name": "com.mail",
                                 "application_info": { "uid": 10100 } },
              "priority": 0, "is_default": true }
        ]
    },
    "scores": {
        "com.mail/.Compose": 0.4,
        "com.chat/.Share": 0.9,
        "com.notes/.Save": 0.1,
        "com.work/.Mail": 1.0
    },
    "grants": {},
    "pinned": ["com.notes/.Save"],
    "blocked": []
}"#;

/// Write `content` to `scenario.json` in a fresh temp dir.
pub fn write_scenario(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scenario.json");
    fs::write(&path, content).unwrap();
    (dir, path)
}
