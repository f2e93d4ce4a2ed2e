use super::select;
use crate::factory::{
    ResponseFactory, feature_definition_path, feature_desired_property_path, feature_path,
    feature_properties_path, feature_property_path, features_path,
};
use serde_json::Value;
use twin_domain::command::types;
use twin_domain::exception::{ErrorClass, ThingException};
use twin_domain::pointer::{FieldSelector, JsonPointer};
use twin_domain::response::Response;
use twin_domain::thing::{Feature, FeatureDefinition, FeatureProperties, Features, features_to_json};

live_command! {
    query RetrieveFeaturesLiveCommand(RetrieveFeatures) => types::RETRIEVE_FEATURES;
    { selected_fields: Option<FieldSelector> }
}

live_command! {
    query RetrieveFeatureLiveCommand(RetrieveFeature) => types::RETRIEVE_FEATURE;
    { feature_id: String, selected_fields: Option<FieldSelector> }
}

live_command! {
    query RetrieveFeatureDefinitionLiveCommand(RetrieveFeatureDefinition)
        => types::RETRIEVE_FEATURE_DEFINITION;
    { feature_id: String }
}

live_command! {
    query RetrieveFeaturePropertiesLiveCommand(RetrieveFeatureProperties)
        => types::RETRIEVE_FEATURE_PROPERTIES;
    { feature_id: String, selected_fields: Option<FieldSelector> }
}

live_command! {
    query RetrieveFeaturePropertyLiveCommand(RetrieveFeatureProperty)
        => types::RETRIEVE_FEATURE_PROPERTY;
    { feature_id: String, pointer: JsonPointer }
}

live_command! {
    /// 查询单个期望属性
    query RetrieveFeatureDesiredPropertyLiveCommand(RetrieveFeatureDesiredProperty)
        => types::RETRIEVE_FEATURE_DESIRED_PROPERTY;
    { feature_id: String, pointer: JsonPointer }
}

impl RetrieveFeaturesLiveCommand {
    pub fn selected_fields(&self) -> Option<&FieldSelector> {
        self.selected_fields.as_ref()
    }
}

impl RetrieveFeatureLiveCommand {
    pub fn feature_id(&self) -> &str {
        &self.feature_id
    }

    pub fn selected_fields(&self) -> Option<&FieldSelector> {
        self.selected_fields.as_ref()
    }
}

impl RetrieveFeatureDefinitionLiveCommand {
    pub fn feature_id(&self) -> &str {
        &self.feature_id
    }
}

impl RetrieveFeaturePropertiesLiveCommand {
    pub fn feature_id(&self) -> &str {
        &self.feature_id
    }

    pub fn selected_fields(&self) -> Option<&FieldSelector> {
        self.selected_fields.as_ref()
    }
}

impl RetrieveFeaturePropertyLiveCommand {
    pub fn feature_id(&self) -> &str {
        &self.feature_id
    }

    pub fn pointer(&self) -> &JsonPointer {
        &self.pointer
    }
}

impl RetrieveFeatureDesiredPropertyLiveCommand {
    pub fn feature_id(&self) -> &str {
        &self.feature_id
    }

    pub fn pointer(&self) -> &JsonPointer {
        &self.pointer
    }
}

impl ResponseFactory<'_, RetrieveFeaturesLiveCommand> {
    pub fn retrieved(&self, features: &Features) -> Response {
        let payload = select(self.command().selected_fields(), features_to_json(features));
        self.respond_ok(features_path(), payload)
    }

    pub fn features_not_accessible_error(&self) -> Response {
        self.respond_error(ThingException::features(ErrorClass::NotAccessible, self.thing_id()))
    }
}

impl ResponseFactory<'_, RetrieveFeatureLiveCommand> {
    pub fn retrieved(&self, feature: &Feature) -> Response {
        let command = self.command();
        let payload = select(command.selected_fields(), feature.to_json());
        self.respond_ok(feature_path(&command.feature_id), payload)
    }

    pub fn feature_not_accessible_error(&self) -> Response {
        self.respond_error(ThingException::feature(
            ErrorClass::NotAccessible,
            self.thing_id(),
            self.command().feature_id.clone(),
        ))
    }
}

impl ResponseFactory<'_, RetrieveFeatureDefinitionLiveCommand> {
    pub fn retrieved(&self, definition: &FeatureDefinition) -> Response {
        self.respond_ok(
            feature_definition_path(&self.command().feature_id),
            definition.to_json(),
        )
    }

    pub fn feature_definition_not_accessible_error(&self) -> Response {
        self.respond_error(ThingException::feature_definition(
            ErrorClass::NotAccessible,
            self.thing_id(),
            self.command().feature_id.clone(),
        ))
    }
}

impl ResponseFactory<'_, RetrieveFeaturePropertiesLiveCommand> {
    pub fn retrieved(&self, properties: &FeatureProperties) -> Response {
        let command = self.command();
        let payload = select(
            command.selected_fields(),
            Value::Object(properties.clone()),
        );
        self.respond_ok(feature_properties_path(&command.feature_id), payload)
    }

    pub fn feature_properties_not_accessible_error(&self) -> Response {
        self.respond_error(ThingException::feature_properties(
            ErrorClass::NotAccessible,
            self.thing_id(),
            self.command().feature_id.clone(),
        ))
    }
}

impl ResponseFactory<'_, RetrieveFeaturePropertyLiveCommand> {
    pub fn retrieved(&self, value: Value) -> Response {
        let command = self.command();
        self.respond_ok(
            feature_property_path(&command.feature_id, &command.pointer),
            value,
        )
    }

    pub fn feature_property_not_accessible_error(&self) -> Response {
        let command = self.command();
        self.respond_error(ThingException::feature_property(
            ErrorClass::NotAccessible,
            self.thing_id(),
            command.feature_id.clone(),
            command.pointer.clone(),
        ))
    }
}

impl ResponseFactory<'_, RetrieveFeatureDesiredPropertyLiveCommand> {
    pub fn retrieved(&self, value: Value) -> Response {
        let command = self.command();
        self.respond_ok(
            feature_desired_property_path(&command.feature_id, &command.pointer),
            value,
        )
    }

    pub fn feature_desired_property_not_accessible_error(&self) -> Response {
        let command = self.command();
        self.respond_error(ThingException::feature_desired_property(
            ErrorClass::NotAccessible,
            self.thing_id(),
            command.feature_id.clone(),
            command.pointer.clone(),
        ))
    }
}
