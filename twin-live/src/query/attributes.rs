use super::select;
use crate::factory::{ResponseFactory, attribute_path, attributes_path};
use serde_json::Value;
use twin_domain::command::types;
use twin_domain::exception::{ErrorClass, ThingException};
use twin_domain::pointer::{FieldSelector, JsonPointer};
use twin_domain::response::Response;
use twin_domain::thing::Attributes;

live_command! {
    query RetrieveAttributesLiveCommand(RetrieveAttributes) => types::RETRIEVE_ATTRIBUTES;
    { selected_fields: Option<FieldSelector> }
}

live_command! {
    query RetrieveAttributeLiveCommand(RetrieveAttribute) => types::RETRIEVE_ATTRIBUTE;
    { pointer: JsonPointer }
}

impl RetrieveAttributesLiveCommand {
    pub fn selected_fields(&self) -> Option<&FieldSelector> {
        self.selected_fields.as_ref()
    }
}

impl RetrieveAttributeLiveCommand {
    pub fn pointer(&self) -> &JsonPointer {
        &self.pointer
    }
}

impl ResponseFactory<'_, RetrieveAttributesLiveCommand> {
    pub fn retrieved(&self, attributes: &Attributes) -> Response {
        let payload = select(
            self.command().selected_fields(),
            Value::Object(attributes.clone()),
        );
        self.respond_ok(attributes_path(), payload)
    }

    pub fn attributes_not_accessible_error(&self) -> Response {
        self.respond_error(ThingException::attributes(ErrorClass::NotAccessible, self.thing_id()))
    }
}

impl ResponseFactory<'_, RetrieveAttributeLiveCommand> {
    pub fn retrieved(&self, value: Value) -> Response {
        self.respond_ok(attribute_path(&self.command().pointer), value)
    }

    pub fn attribute_not_accessible_error(&self) -> Response {
        self.respond_error(ThingException::attribute(
            ErrorClass::NotAccessible,
            self.thing_id(),
            self.command().pointer.clone(),
        ))
    }
}
