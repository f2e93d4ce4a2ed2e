#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;
use std::sync::Arc;
use twin_domain::command::{CommandPayload, ThingCommand};
use twin_domain::headers::Headers;
use twin_domain::pointer::JsonPointer;
use twin_domain::thing::{Feature, FeatureDefinition, Features, Thing};
use twin_domain::value_object::ThingId;
use twin_live::{Category, FixedClock, LiveCommandRegistry};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 10, 30, 0).unwrap()
}

pub fn registry() -> LiveCommandRegistry {
    init_tracing();
    LiveCommandRegistry::builder()
        .clock(Arc::new(FixedClock::new(fixed_time())))
        .build()
}

pub fn thing_id() -> ThingId {
    "ns:thing1".parse().unwrap()
}

pub fn headers() -> Headers {
    Headers::empty()
        .with_correlation_id("cor-42")
        .with_response_required(true)
        .with_authorization_subjects(["user:alice"])
}

pub fn command(payload: CommandPayload) -> ThingCommand {
    ThingCommand::of(thing_id(), payload, headers())
}

pub fn sample_thing() -> Thing {
    Thing::from_json(&json!({
        "thingId": "ns:thing1",
        "policyId": "ns:policy",
        "attributes": { "location": { "room": "kitchen" } },
        "features": { "lamp": { "properties": { "on": true } } }
    }))
    .unwrap()
}

pub fn lamp() -> Feature {
    Feature::builder()
        .definition(FeatureDefinition::new(["ns:lamp:1.0"]).unwrap())
        .properties(json!({ "on": true }).as_object().cloned().unwrap())
        .build()
}

/// 每种支持的命令一个载荷，及其期望的分类
pub fn all_payloads() -> Vec<(CommandPayload, Category)> {
    let pointer = || -> JsonPointer { "/location/room".parse().unwrap() };
    let lamp_id = || "lamp".to_string();

    vec![
        (CommandPayload::CreateThing { thing: sample_thing() }, Category::Modify),
        (CommandPayload::ModifyThing { thing: sample_thing() }, Category::Modify),
        (CommandPayload::DeleteThing, Category::Delete),
        (
            CommandPayload::MergeThing {
                path: "/attributes".parse().unwrap(),
                value: json!({ "floor": 2 }),
            },
            Category::Merge,
        ),
        (
            CommandPayload::ModifyAttributes {
                attributes: json!({ "floor": 2 }).as_object().cloned().unwrap(),
            },
            Category::Modify,
        ),
        (CommandPayload::DeleteAttributes, Category::Delete),
        (
            CommandPayload::ModifyAttribute {
                pointer: pointer(),
                value: json!("hall"),
            },
            Category::Modify,
        ),
        (CommandPayload::DeleteAttribute { pointer: pointer() }, Category::Delete),
        (
            CommandPayload::ModifyFeatures {
                features: Features::from([(lamp_id(), lamp())]),
            },
            Category::Modify,
        ),
        (CommandPayload::DeleteFeatures, Category::Delete),
        (
            CommandPayload::ModifyFeature {
                feature_id: lamp_id(),
                feature: lamp(),
            },
            Category::Modify,
        ),
        (CommandPayload::DeleteFeature { feature_id: lamp_id() }, Category::Delete),
        (
            CommandPayload::ModifyFeatureDefinition {
                feature_id: lamp_id(),
                definition: FeatureDefinition::new(["ns:lamp:2.0"]).unwrap(),
            },
            Category::Modify,
        ),
        (
            CommandPayload::DeleteFeatureDefinition { feature_id: lamp_id() },
            Category::Delete,
        ),
        (
            CommandPayload::ModifyFeatureProperties {
                feature_id: lamp_id(),
                properties: json!({ "on": false }).as_object().cloned().unwrap(),
            },
            Category::Modify,
        ),
        (
            CommandPayload::DeleteFeatureProperties { feature_id: lamp_id() },
            Category::Delete,
        ),
        (
            CommandPayload::ModifyFeatureProperty {
                feature_id: lamp_id(),
                pointer: "/on".parse().unwrap(),
                value: json!(false),
            },
            Category::Modify,
        ),
        (
            CommandPayload::DeleteFeatureProperty {
                feature_id: lamp_id(),
                pointer: "/on".parse().unwrap(),
            },
            Category::Delete,
        ),
        (
            CommandPayload::DeleteFeatureDesiredProperties { feature_id: lamp_id() },
            Category::Delete,
        ),
        (
            CommandPayload::DeleteFeatureDesiredProperty {
                feature_id: lamp_id(),
                pointer: "/on".parse().unwrap(),
            },
            Category::Delete,
        ),
        (CommandPayload::RetrieveThing { selected_fields: None }, Category::Query),
        (
            CommandPayload::RetrieveThings {
                thing_ids: vec![],
                selected_fields: None,
                namespace: None,
            },
            Category::Query,
        ),
        (
            CommandPayload::RetrieveAttributes { selected_fields: None },
            Category::Query,
        ),
        (CommandPayload::RetrieveAttribute { pointer: pointer() }, Category::Query),
        (CommandPayload::RetrieveFeatures { selected_fields: None }, Category::Query),
        (
            CommandPayload::RetrieveFeature {
                feature_id: lamp_id(),
                selected_fields: None,
            },
            Category::Query,
        ),
        (
            CommandPayload::RetrieveFeatureDefinition { feature_id: lamp_id() },
            Category::Query,
        ),
        (
            CommandPayload::RetrieveFeatureProperties {
                feature_id: lamp_id(),
                selected_fields: None,
            },
            Category::Query,
        ),
        (
            CommandPayload::RetrieveFeatureProperty {
                feature_id: lamp_id(),
                pointer: "/on".parse().unwrap(),
            },
            Category::Query,
        ),
        (
            CommandPayload::RetrieveFeatureDesiredProperty {
                feature_id: lamp_id(),
                pointer: "/on".parse().unwrap(),
            },
            Category::Query,
        ),
    ]
}
