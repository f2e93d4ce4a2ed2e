use crate::category::Category;
use crate::factory::{EventFactory, ResponseFactory, attribute_path, attributes_path};
use serde_json::Value;
use twin_domain::command::types;
use twin_domain::domain_event::{Event, EventAction, EventSubject};
use twin_domain::exception::{ErrorClass, ThingException};
use twin_domain::pointer::JsonPointer;
use twin_domain::response::Response;
use twin_domain::thing::Attributes;

live_command! {
    /// 替换全部属性
    modify ModifyAttributesLiveCommand(ModifyAttributes)
        => types::MODIFY_ATTRIBUTES, Category::Modify;
    { attributes: Attributes }
}

live_command! {
    modify DeleteAttributesLiveCommand(DeleteAttributes)
        => types::DELETE_ATTRIBUTES, Category::Delete;
    {}
}

live_command! {
    /// 设置 `pointer` 处的单个属性
    modify ModifyAttributeLiveCommand(ModifyAttribute)
        => types::MODIFY_ATTRIBUTE, Category::Modify;
    { pointer: JsonPointer, value: Value }
}

live_command! {
    /// 删除 `pointer` 处的单个属性
    modify DeleteAttributeLiveCommand(DeleteAttribute)
        => types::DELETE_ATTRIBUTE, Category::Delete;
    { pointer: JsonPointer }
}

impl ModifyAttributesLiveCommand {
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

impl ModifyAttributeLiveCommand {
    pub fn pointer(&self) -> &JsonPointer {
        &self.pointer
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl DeleteAttributeLiveCommand {
    pub fn pointer(&self) -> &JsonPointer {
        &self.pointer
    }
}

// --- ModifyAttributes ---

impl ResponseFactory<'_, ModifyAttributesLiveCommand> {
    pub fn created(&self) -> Response {
        let attributes = Value::Object(self.command().attributes.clone());
        self.respond_created(attributes_path(), attributes)
    }

    pub fn modified(&self) -> Response {
        self.respond_no_content(attributes_path())
    }

    pub fn attributes_not_accessible_error(&self) -> Response {
        self.respond_error(ThingException::attributes(ErrorClass::NotAccessible, self.thing_id()))
    }

    pub fn attributes_not_modifiable_error(&self) -> Response {
        self.respond_error(ThingException::attributes(ErrorClass::NotModifiable, self.thing_id()))
    }
}

impl EventFactory<'_, ModifyAttributesLiveCommand> {
    pub fn created(&self) -> Event {
        self.emit(
            EventSubject::Attributes,
            EventAction::Created,
            attributes_path(),
            Some(Value::Object(self.command().attributes.clone())),
        )
    }

    pub fn modified(&self) -> Event {
        self.emit(
            EventSubject::Attributes,
            EventAction::Modified,
            attributes_path(),
            Some(Value::Object(self.command().attributes.clone())),
        )
    }
}

// --- DeleteAttributes ---

impl ResponseFactory<'_, DeleteAttributesLiveCommand> {
    pub fn deleted(&self) -> Response {
        self.respond_no_content(attributes_path())
    }

    pub fn attributes_not_accessible_error(&self) -> Response {
        self.respond_error(ThingException::attributes(ErrorClass::NotAccessible, self.thing_id()))
    }

    pub fn attributes_not_modifiable_error(&self) -> Response {
        self.respond_error(ThingException::attributes(ErrorClass::NotModifiable, self.thing_id()))
    }
}

impl EventFactory<'_, DeleteAttributesLiveCommand> {
    pub fn deleted(&self) -> Event {
        self.emit(
            EventSubject::Attributes,
            EventAction::Deleted,
            attributes_path(),
            None,
        )
    }
}

// --- ModifyAttribute ---

impl ResponseFactory<'_, ModifyAttributeLiveCommand> {
    /// 201，载荷为命令中的属性值
    pub fn created(&self) -> Response {
        let command = self.command();
        self.respond_created(attribute_path(&command.pointer), command.value.clone())
    }

    pub fn modified(&self) -> Response {
        self.respond_no_content(attribute_path(&self.command().pointer))
    }

    pub fn attribute_not_accessible_error(&self) -> Response {
        self.respond_error(ThingException::attribute(
            ErrorClass::NotAccessible,
            self.thing_id(),
            self.command().pointer.clone(),
        ))
    }

    pub fn attribute_not_modifiable_error(&self) -> Response {
        self.respond_error(ThingException::attribute(
            ErrorClass::NotModifiable,
            self.thing_id(),
            self.command().pointer.clone(),
        ))
    }
}

impl EventFactory<'_, ModifyAttributeLiveCommand> {
    pub fn created(&self) -> Event {
        let command = self.command();
        self.emit(
            EventSubject::Attribute,
            EventAction::Created,
            attribute_path(&command.pointer),
            Some(command.value.clone()),
        )
    }

    pub fn modified(&self) -> Event {
        let command = self.command();
        self.emit(
            EventSubject::Attribute,
            EventAction::Modified,
            attribute_path(&command.pointer),
            Some(command.value.clone()),
        )
    }
}

// --- DeleteAttribute ---

impl ResponseFactory<'_, DeleteAttributeLiveCommand> {
    pub fn deleted(&self) -> Response {
        self.respond_no_content(attribute_path(&self.command().pointer))
    }

    pub fn attribute_not_accessible_error(&self) -> Response {
        self.respond_error(ThingException::attribute(
            ErrorClass::NotAccessible,
            self.thing_id(),
            self.command().pointer.clone(),
        ))
    }

    pub fn attribute_not_modifiable_error(&self) -> Response {
        self.respond_error(ThingException::attribute(
            ErrorClass::NotModifiable,
            self.thing_id(),
            self.command().pointer.clone(),
        ))
    }
}

impl EventFactory<'_, DeleteAttributeLiveCommand> {
    pub fn deleted(&self) -> Event {
        self.emit(
            EventSubject::Attribute,
            EventAction::Deleted,
            attribute_path(&self.command().pointer),
            None,
        )
    }
}
