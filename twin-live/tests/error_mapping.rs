mod common;

use anyhow::Result as AnyResult;
use common::{all_payloads, command, registry};
use twin_domain::response::{HttpStatus, Response};
use twin_live::{Answer, LiveCommands};

/// 对修改类命令分别构建 NotAccessible 与 NotModifiable 应答
macro_rules! error_pair {
    ($cmd:expr, $not_accessible:ident, $not_modifiable:ident) => {{
        let not_accessible = $cmd
            .answer()
            .with_response(|f| f.$not_accessible())?
            .without_event()?
            .build()?;
        let not_modifiable = $cmd
            .answer()
            .with_response(|f| f.$not_modifiable())?
            .without_event()?
            .build()?;
        Some((not_accessible, not_modifiable))
    }};
}

macro_rules! query_error {
    ($cmd:expr, $not_accessible:ident) => {{
        let answer = $cmd
            .answer()
            .with_response(|f| f.$not_accessible())?
            .build()?;
        Some(answer)
    }};
}

fn modify_errors(live: &LiveCommands) -> AnyResult<Option<(Answer, Answer)>> {
    use LiveCommands::*;

    let pair = match live {
        CreateThing(c) => error_pair!(c, thing_not_accessible_error, thing_not_modifiable_error),
        ModifyThing(c) => error_pair!(c, thing_not_accessible_error, thing_not_modifiable_error),
        DeleteThing(c) => error_pair!(c, thing_not_accessible_error, thing_not_modifiable_error),
        MergeThing(c) => error_pair!(c, thing_not_accessible_error, thing_not_modifiable_error),
        ModifyAttributes(c) => error_pair!(
            c,
            attributes_not_accessible_error,
            attributes_not_modifiable_error
        ),
        DeleteAttributes(c) => error_pair!(
            c,
            attributes_not_accessible_error,
            attributes_not_modifiable_error
        ),
        ModifyAttribute(c) => error_pair!(
            c,
            attribute_not_accessible_error,
            attribute_not_modifiable_error
        ),
        DeleteAttribute(c) => error_pair!(
            c,
            attribute_not_accessible_error,
            attribute_not_modifiable_error
        ),
        ModifyFeatures(c) => error_pair!(
            c,
            features_not_accessible_error,
            features_not_modifiable_error
        ),
        DeleteFeatures(c) => error_pair!(
            c,
            features_not_accessible_error,
            features_not_modifiable_error
        ),
        ModifyFeature(c) => error_pair!(
            c,
            feature_not_accessible_error,
            feature_not_modifiable_error
        ),
        DeleteFeature(c) => error_pair!(
            c,
            feature_not_accessible_error,
            feature_not_modifiable_error
        ),
        ModifyFeatureDefinition(c) => error_pair!(
            c,
            feature_definition_not_accessible_error,
            feature_definition_not_modifiable_error
        ),
        DeleteFeatureDefinition(c) => error_pair!(
            c,
            feature_definition_not_accessible_error,
            feature_definition_not_modifiable_error
        ),
        ModifyFeatureProperties(c) => error_pair!(
            c,
            feature_properties_not_accessible_error,
            feature_properties_not_modifiable_error
        ),
        DeleteFeatureProperties(c) => error_pair!(
            c,
            feature_properties_not_accessible_error,
            feature_properties_not_modifiable_error
        ),
        ModifyFeatureProperty(c) => error_pair!(
            c,
            feature_property_not_accessible_error,
            feature_property_not_modifiable_error
        ),
        DeleteFeatureProperty(c) => error_pair!(
            c,
            feature_property_not_accessible_error,
            feature_property_not_modifiable_error
        ),
        DeleteFeatureDesiredProperties(c) => error_pair!(
            c,
            feature_desired_properties_not_accessible_error,
            feature_desired_properties_not_modifiable_error
        ),
        DeleteFeatureDesiredProperty(c) => error_pair!(
            c,
            feature_desired_property_not_accessible_error,
            feature_desired_property_not_modifiable_error
        ),
        _ => None,
    };
    Ok(pair)
}

fn query_errors(live: &LiveCommands) -> AnyResult<Option<Answer>> {
    use LiveCommands::*;

    let answer = match live {
        RetrieveThing(c) => query_error!(c, thing_not_accessible_error),
        RetrieveAttributes(c) => query_error!(c, attributes_not_accessible_error),
        RetrieveAttribute(c) => query_error!(c, attribute_not_accessible_error),
        RetrieveFeatures(c) => query_error!(c, features_not_accessible_error),
        RetrieveFeature(c) => query_error!(c, feature_not_accessible_error),
        RetrieveFeatureDefinition(c) => query_error!(c, feature_definition_not_accessible_error),
        RetrieveFeatureProperties(c) => query_error!(c, feature_properties_not_accessible_error),
        RetrieveFeatureProperty(c) => query_error!(c, feature_property_not_accessible_error),
        RetrieveFeatureDesiredProperty(c) => {
            query_error!(c, feature_desired_property_not_accessible_error)
        }
        _ => None,
    };
    Ok(answer)
}

fn error_status(answer: &Answer) -> Option<HttpStatus> {
    answer
        .response()
        .filter(|r| r.is_error())
        .map(Response::status)
}

// 测试所有修改类命令：NotAccessible → 404，NotModifiable → 403
#[test]
fn mutating_commands_map_errors_to_404_and_403() -> AnyResult<()> {
    let registry = registry();
    let mut checked = 0;

    for (payload, _) in all_payloads() {
        let live = registry.get_live_command(command(payload))?;
        let Some((not_accessible, not_modifiable)) = modify_errors(&live)? else {
            assert!(live.is_query(), "{} has no error pair", live.command_type());
            continue;
        };

        assert_eq!(error_status(&not_accessible), Some(HttpStatus::NotFound));
        assert_eq!(error_status(&not_modifiable), Some(HttpStatus::Forbidden));
        assert!(not_accessible.event().is_none());

        let error = not_modifiable
            .response()
            .and_then(Response::as_error)
            .expect("error response");
        assert_eq!(error.exception().thing_id(), live.entity_id());
        assert!(error.exception().error_code().ends_with(".notmodifiable"));
        assert!(!error.headers().response_required());
        checked += 1;
    }

    assert_eq!(checked, 20);
    Ok(())
}

#[test]
fn query_commands_map_not_accessible_to_404() -> AnyResult<()> {
    let registry = registry();
    let mut checked = 0;

    for (payload, _) in all_payloads() {
        let live = registry.get_live_command(command(payload))?;
        if let Some(answer) = query_errors(&live)? {
            assert_eq!(error_status(&answer), Some(HttpStatus::NotFound));
            let error = answer
                .response()
                .and_then(Response::as_error)
                .expect("error response");
            assert!(error.exception().error_code().ends_with(".notfound"));
            checked += 1;
        }
    }

    // RetrieveThings 面向多个实体，没有错误结果
    assert_eq!(checked, 9);
    Ok(())
}
