use crate::category::Category;
use crate::factory::{EventFactory, ResponseFactory, thing_path};
use serde_json::Value;
use twin_domain::command::types;
use twin_domain::domain_event::{Event, EventAction, EventSubject};
use twin_domain::exception::{ErrorClass, ThingException};
use twin_domain::pointer::JsonPointer;
use twin_domain::response::Response;
use twin_domain::thing::Thing;

live_command! {
    /// 创建 Thing
    modify CreateThingLiveCommand(CreateThing) => types::CREATE_THING, Category::Modify;
    { thing: Thing }
}

live_command! {
    /// 整体替换 Thing（不存在时创建）
    modify ModifyThingLiveCommand(ModifyThing) => types::MODIFY_THING, Category::Modify;
    { thing: Thing }
}

live_command! {
    modify DeleteThingLiveCommand(DeleteThing) => types::DELETE_THING, Category::Delete;
    {}
}

live_command! {
    /// 在 `path` 处合并 JSON 值
    modify MergeThingLiveCommand(MergeThing) => types::MERGE_THING, Category::Merge;
    { path: JsonPointer, value: Value }
}

impl CreateThingLiveCommand {
    pub fn thing(&self) -> &Thing {
        &self.thing
    }
}

impl ModifyThingLiveCommand {
    pub fn thing(&self) -> &Thing {
        &self.thing
    }
}

impl MergeThingLiveCommand {
    /// 合并位置，相对 Thing 根
    pub fn path(&self) -> &JsonPointer {
        &self.path
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

// --- CreateThing ---

impl ResponseFactory<'_, CreateThingLiveCommand> {
    /// 201，载荷为新建的 Thing
    pub fn created(&self) -> Response {
        self.respond_created(thing_path(), self.command().thing.to_json())
    }

    pub fn thing_not_accessible_error(&self) -> Response {
        self.respond_error(ThingException::thing(ErrorClass::NotAccessible, self.thing_id()))
    }

    pub fn thing_not_modifiable_error(&self) -> Response {
        self.respond_error(ThingException::thing(ErrorClass::NotModifiable, self.thing_id()))
    }
}

impl EventFactory<'_, CreateThingLiveCommand> {
    pub fn created(&self) -> Event {
        self.emit(
            EventSubject::Thing,
            EventAction::Created,
            thing_path(),
            Some(self.command().thing.to_json()),
        )
    }
}

// --- ModifyThing ---

impl ResponseFactory<'_, ModifyThingLiveCommand> {
    pub fn created(&self) -> Response {
        self.respond_created(thing_path(), self.command().thing.to_json())
    }

    pub fn modified(&self) -> Response {
        self.respond_no_content(thing_path())
    }

    pub fn thing_not_accessible_error(&self) -> Response {
        self.respond_error(ThingException::thing(ErrorClass::NotAccessible, self.thing_id()))
    }

    pub fn thing_not_modifiable_error(&self) -> Response {
        self.respond_error(ThingException::thing(ErrorClass::NotModifiable, self.thing_id()))
    }
}

impl EventFactory<'_, ModifyThingLiveCommand> {
    pub fn created(&self) -> Event {
        self.emit(
            EventSubject::Thing,
            EventAction::Created,
            thing_path(),
            Some(self.command().thing.to_json()),
        )
    }

    pub fn modified(&self) -> Event {
        self.emit(
            EventSubject::Thing,
            EventAction::Modified,
            thing_path(),
            Some(self.command().thing.to_json()),
        )
    }
}

// --- DeleteThing ---

impl ResponseFactory<'_, DeleteThingLiveCommand> {
    pub fn deleted(&self) -> Response {
        self.respond_no_content(thing_path())
    }

    pub fn thing_not_accessible_error(&self) -> Response {
        self.respond_error(ThingException::thing(ErrorClass::NotAccessible, self.thing_id()))
    }

    pub fn thing_not_modifiable_error(&self) -> Response {
        self.respond_error(ThingException::thing(ErrorClass::NotModifiable, self.thing_id()))
    }
}

impl EventFactory<'_, DeleteThingLiveCommand> {
    pub fn deleted(&self) -> Event {
        self.emit(EventSubject::Thing, EventAction::Deleted, thing_path(), None)
    }
}

// --- MergeThing ---

impl ResponseFactory<'_, MergeThingLiveCommand> {
    /// 204，资源路径为合并位置
    pub fn merged(&self) -> Response {
        self.respond_no_content(self.command().path.clone())
    }

    pub fn thing_not_accessible_error(&self) -> Response {
        self.respond_error(ThingException::thing(ErrorClass::NotAccessible, self.thing_id()))
    }

    pub fn thing_not_modifiable_error(&self) -> Response {
        self.respond_error(ThingException::thing(ErrorClass::NotModifiable, self.thing_id()))
    }
}

impl EventFactory<'_, MergeThingLiveCommand> {
    pub fn merged(&self) -> Event {
        let command = self.command();
        self.emit(
            EventSubject::Thing,
            EventAction::Merged,
            command.path.clone(),
            Some(command.value.clone()),
        )
    }
}
