//! 特性属性与期望属性的修改命令
//!
use crate::category::Category;
use crate::factory::{
    EventFactory, ResponseFactory, feature_desired_properties_path,
    feature_desired_property_path, feature_properties_path, feature_property_path,
};
use serde_json::Value;
use twin_domain::command::types;
use twin_domain::domain_event::{Event, EventAction, EventSubject};
use twin_domain::exception::{ErrorClass, ThingException};
use twin_domain::pointer::JsonPointer;
use twin_domain::response::Response;
use twin_domain::thing::FeatureProperties;

live_command! {
    modify ModifyFeaturePropertiesLiveCommand(ModifyFeatureProperties)
        => types::MODIFY_FEATURE_PROPERTIES, Category::Modify;
    { feature_id: String, properties: FeatureProperties }
}

live_command! {
    modify DeleteFeaturePropertiesLiveCommand(DeleteFeatureProperties)
        => types::DELETE_FEATURE_PROPERTIES, Category::Delete;
    { feature_id: String }
}

live_command! {
    modify ModifyFeaturePropertyLiveCommand(ModifyFeatureProperty)
        => types::MODIFY_FEATURE_PROPERTY, Category::Modify;
    { feature_id: String, pointer: JsonPointer, value: Value }
}

live_command! {
    modify DeleteFeaturePropertyLiveCommand(DeleteFeatureProperty)
        => types::DELETE_FEATURE_PROPERTY, Category::Delete;
    { feature_id: String, pointer: JsonPointer }
}

live_command! {
    /// 删除特性的全部期望属性
    modify DeleteFeatureDesiredPropertiesLiveCommand(DeleteFeatureDesiredProperties)
        => types::DELETE_FEATURE_DESIRED_PROPERTIES, Category::Delete;
    { feature_id: String }
}

live_command! {
    /// 删除特性的单个期望属性
    modify DeleteFeatureDesiredPropertyLiveCommand(DeleteFeatureDesiredProperty)
        => types::DELETE_FEATURE_DESIRED_PROPERTY, Category::Delete;
    { feature_id: String, pointer: JsonPointer }
}

impl ModifyFeaturePropertiesLiveCommand {
    pub fn feature_id(&self) -> &str {
        &self.feature_id
    }

    pub fn properties(&self) -> &FeatureProperties {
        &self.properties
    }
}

impl DeleteFeaturePropertiesLiveCommand {
    pub fn feature_id(&self) -> &str {
        &self.feature_id
    }
}

impl ModifyFeaturePropertyLiveCommand {
    pub fn feature_id(&self) -> &str {
        &self.feature_id
    }

    /// 属性在 `properties` 内的位置
    pub fn pointer(&self) -> &JsonPointer {
        &self.pointer
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl DeleteFeaturePropertyLiveCommand {
    pub fn feature_id(&self) -> &str {
        &self.feature_id
    }

    pub fn pointer(&self) -> &JsonPointer {
        &self.pointer
    }
}

impl DeleteFeatureDesiredPropertiesLiveCommand {
    pub fn feature_id(&self) -> &str {
        &self.feature_id
    }
}

impl DeleteFeatureDesiredPropertyLiveCommand {
    pub fn feature_id(&self) -> &str {
        &self.feature_id
    }

    /// 属性在 `desiredProperties` 内的位置
    pub fn pointer(&self) -> &JsonPointer {
        &self.pointer
    }
}

// --- ModifyFeatureProperties ---

impl ResponseFactory<'_, ModifyFeaturePropertiesLiveCommand> {
    pub fn created(&self) -> Response {
        let command = self.command();
        self.respond_created(
            feature_properties_path(&command.feature_id),
            Value::Object(command.properties.clone()),
        )
    }

    pub fn modified(&self) -> Response {
        self.respond_no_content(feature_properties_path(&self.command().feature_id))
    }

    pub fn feature_properties_not_accessible_error(&self) -> Response {
        self.respond_error(ThingException::feature_properties(
            ErrorClass::NotAccessible,
            self.thing_id(),
            self.command().feature_id.clone(),
        ))
    }

    pub fn feature_properties_not_modifiable_error(&self) -> Response {
        self.respond_error(ThingException::feature_properties(
            ErrorClass::NotModifiable,
            self.thing_id(),
            self.command().feature_id.clone(),
        ))
    }
}

impl EventFactory<'_, ModifyFeaturePropertiesLiveCommand> {
    pub fn created(&self) -> Event {
        let command = self.command();
        self.emit(
            EventSubject::FeatureProperties,
            EventAction::Created,
            feature_properties_path(&command.feature_id),
            Some(Value::Object(command.properties.clone())),
        )
    }

    pub fn modified(&self) -> Event {
        let command = self.command();
        self.emit(
            EventSubject::FeatureProperties,
            EventAction::Modified,
            feature_properties_path(&command.feature_id),
            Some(Value::Object(command.properties.clone())),
        )
    }
}

// --- DeleteFeatureProperties ---

impl ResponseFactory<'_, DeleteFeaturePropertiesLiveCommand> {
    pub fn deleted(&self) -> Response {
        self.respond_no_content(feature_properties_path(&self.command().feature_id))
    }

    pub fn feature_properties_not_accessible_error(&self) -> Response {
        self.respond_error(ThingException::feature_properties(
            ErrorClass::NotAccessible,
            self.thing_id(),
            self.command().feature_id.clone(),
        ))
    }

    pub fn feature_properties_not_modifiable_error(&self) -> Response {
        self.respond_error(ThingException::feature_properties(
            ErrorClass::NotModifiable,
            self.thing_id(),
            self.command().feature_id.clone(),
        ))
    }
}

impl EventFactory<'_, DeleteFeaturePropertiesLiveCommand> {
    pub fn deleted(&self) -> Event {
        self.emit(
            EventSubject::FeatureProperties,
            EventAction::Deleted,
            feature_properties_path(&self.command().feature_id),
            None,
        )
    }
}

// --- ModifyFeatureProperty ---

impl ResponseFactory<'_, ModifyFeaturePropertyLiveCommand> {
    pub fn created(&self) -> Response {
        let command = self.command();
        self.respond_created(
            feature_property_path(&command.feature_id, &command.pointer),
            command.value.clone(),
        )
    }

    pub fn modified(&self) -> Response {
        let command = self.command();
        self.respond_no_content(feature_property_path(&command.feature_id, &command.pointer))
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

    pub fn feature_property_not_modifiable_error(&self) -> Response {
        let command = self.command();
        self.respond_error(ThingException::feature_property(
            ErrorClass::NotModifiable,
            self.thing_id(),
            command.feature_id.clone(),
            command.pointer.clone(),
        ))
    }
}

impl EventFactory<'_, ModifyFeaturePropertyLiveCommand> {
    pub fn created(&self) -> Event {
        let command = self.command();
        self.emit(
            EventSubject::FeatureProperty,
            EventAction::Created,
            feature_property_path(&command.feature_id, &command.pointer),
            Some(command.value.clone()),
        )
    }

    pub fn modified(&self) -> Event {
        let command = self.command();
        self.emit(
            EventSubject::FeatureProperty,
            EventAction::Modified,
            feature_property_path(&command.feature_id, &command.pointer),
            Some(command.value.clone()),
        )
    }
}

// --- DeleteFeatureProperty ---

impl ResponseFactory<'_, DeleteFeaturePropertyLiveCommand> {
    pub fn deleted(&self) -> Response {
        let command = self.command();
        self.respond_no_content(feature_property_path(&command.feature_id, &command.pointer))
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

    pub fn feature_property_not_modifiable_error(&self) -> Response {
        let command = self.command();
        self.respond_error(ThingException::feature_property(
            ErrorClass::NotModifiable,
            self.thing_id(),
            command.feature_id.clone(),
            command.pointer.clone(),
        ))
    }
}

impl EventFactory<'_, DeleteFeaturePropertyLiveCommand> {
    pub fn deleted(&self) -> Event {
        let command = self.command();
        self.emit(
            EventSubject::FeatureProperty,
            EventAction::Deleted,
            feature_property_path(&command.feature_id, &command.pointer),
            None,
        )
    }
}

// --- DeleteFeatureDesiredProperties ---

impl ResponseFactory<'_, DeleteFeatureDesiredPropertiesLiveCommand> {
    pub fn deleted(&self) -> Response {
        self.respond_no_content(feature_desired_properties_path(&self.command().feature_id))
    }

    pub fn feature_desired_properties_not_accessible_error(&self) -> Response {
        self.respond_error(ThingException::feature_properties(
            ErrorClass::NotAccessible,
            self.thing_id(),
            self.command().feature_id.clone(),
        ))
    }

    pub fn feature_desired_properties_not_modifiable_error(&self) -> Response {
        self.respond_error(ThingException::feature_properties(
            ErrorClass::NotModifiable,
            self.thing_id(),
            self.command().feature_id.clone(),
        ))
    }
}

impl EventFactory<'_, DeleteFeatureDesiredPropertiesLiveCommand> {
    pub fn deleted(&self) -> Event {
        self.emit(
            EventSubject::FeatureDesiredProperties,
            EventAction::Deleted,
            feature_desired_properties_path(&self.command().feature_id),
            None,
        )
    }
}

// --- DeleteFeatureDesiredProperty ---

impl ResponseFactory<'_, DeleteFeatureDesiredPropertyLiveCommand> {
    pub fn deleted(&self) -> Response {
        let command = self.command();
        self.respond_no_content(feature_desired_property_path(
            &command.feature_id,
            &command.pointer,
        ))
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

    pub fn feature_desired_property_not_modifiable_error(&self) -> Response {
        let command = self.command();
        self.respond_error(ThingException::feature_desired_property(
            ErrorClass::NotModifiable,
            self.thing_id(),
            command.feature_id.clone(),
            command.pointer.clone(),
        ))
    }
}

impl EventFactory<'_, DeleteFeatureDesiredPropertyLiveCommand> {
    pub fn deleted(&self) -> Event {
        let command = self.command();
        self.emit(
            EventSubject::FeatureDesiredProperty,
            EventAction::Deleted,
            feature_desired_property_path(&command.feature_id, &command.pointer),
            None,
        )
    }
}
