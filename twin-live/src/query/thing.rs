use super::select;
use crate::factory::{ResponseFactory, thing_path};
use serde_json::{Map, Value};
use twin_domain::command::types;
use twin_domain::exception::{ErrorClass, ThingException};
use twin_domain::pointer::{FieldSelector, JsonPointer};
use twin_domain::response::{HttpStatus, Response};
use twin_domain::thing::Thing;
use twin_domain::value_object::ThingId;

live_command! {
    /// 查询单个 Thing
    query RetrieveThingLiveCommand(RetrieveThing) => types::RETRIEVE_THING;
    { selected_fields: Option<FieldSelector> }
}

live_command! {
    /// 批量查询 Thing
    ///
    /// 面向多个实体，命令自身的实体 ID 只是占位，响应也不带实体 ID。
    query RetrieveThingsLiveCommand(RetrieveThings) => types::RETRIEVE_THINGS;
    {
        thing_ids: Vec<ThingId>,
        selected_fields: Option<FieldSelector>,
        namespace: Option<String>,
    }
}

impl RetrieveThingLiveCommand {
    pub fn selected_fields(&self) -> Option<&FieldSelector> {
        self.selected_fields.as_ref()
    }
}

impl RetrieveThingsLiveCommand {
    pub fn thing_ids(&self) -> &[ThingId] {
        &self.thing_ids
    }

    pub fn selected_fields(&self) -> Option<&FieldSelector> {
        self.selected_fields.as_ref()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }
}

impl ResponseFactory<'_, RetrieveThingLiveCommand> {
    /// 200，载荷为按字段选择器裁剪后的 Thing
    pub fn retrieved(&self, thing: &Thing) -> Response {
        let payload = select(self.command().selected_fields(), thing.to_json());
        self.respond_ok(thing_path(), payload)
    }

    pub fn thing_not_accessible_error(&self) -> Response {
        self.respond_error(ThingException::thing(ErrorClass::NotAccessible, self.thing_id()))
    }
}

impl ResponseFactory<'_, RetrieveThingsLiveCommand> {
    pub fn retrieved(&self, things: &[Thing]) -> Response {
        self.retrieved_matching(things, |_, _| true)
    }

    /// 200，每个 Thing 只保留满足 `predicate(字段名, 字段值)` 的顶层字段；
    /// 命令中的命名空间原样带入响应
    pub fn retrieved_matching<P>(&self, things: &[Thing], predicate: P) -> Response
    where
        P: Fn(&str, &Value) -> bool,
    {
        let selected_fields = self.command().selected_fields();
        let payload = things
            .iter()
            .map(|thing| match select(selected_fields, thing.to_json()) {
                Value::Object(fields) => Value::Object(
                    fields
                        .into_iter()
                        .filter(|(key, value)| predicate(key.as_str(), value))
                        .collect::<Map<String, Value>>(),
                ),
                other => other,
            })
            .collect();

        self.respond_without_entity(
            JsonPointer::empty(),
            HttpStatus::Ok,
            Some(Value::Array(payload)),
            self.command().namespace.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use crate::live_command::LiveCommand;
    use serde_json::json;
    use std::sync::Arc;
    use twin_domain::command::{CommandPayload, ThingCommand};
    use twin_domain::headers::Headers;

    fn things() -> Vec<Thing> {
        vec![
            Thing::from_json(&json!({
                "thingId": "ns:a",
                "policyId": "ns:p",
                "attributes": { "room": "kitchen", "floor": 1 }
            }))
            .unwrap(),
            Thing::from_json(&json!({ "thingId": "ns:b", "policyId": "ns:p" })).unwrap(),
        ]
    }

    fn retrieve_things(selected_fields: Option<&str>) -> RetrieveThingsLiveCommand {
        let command = ThingCommand::of(
            ThingId::placeholder(),
            CommandPayload::RetrieveThings {
                thing_ids: vec!["ns:a".parse().unwrap(), "ns:b".parse().unwrap()],
                selected_fields: selected_fields.map(|raw| raw.parse().unwrap()),
                namespace: Some("ns".into()),
            },
            Headers::empty(),
        );
        RetrieveThingsLiveCommand::from_command(command, Arc::new(SystemClock)).unwrap()
    }

    #[test]
    fn retrieved_matching_filters_fields() {
        let command = retrieve_things(None);
        assert_eq!(command.namespace(), Some("ns"));
        assert_eq!(command.thing_ids().len(), 2);

        let answer = command
            .answer()
            .with_response(|f| f.retrieved_matching(&things(), |key, _| key == "thingId"))
            .unwrap()
            .build()
            .unwrap();

        let response = answer.response().unwrap().as_success().unwrap();
        assert!(response.entity_id().is_none());
        assert_eq!(response.namespace(), Some("ns"));
        assert_eq!(
            response.payload(),
            Some(&json!([{ "thingId": "ns:a" }, { "thingId": "ns:b" }]))
        );
    }

    #[test]
    fn selected_fields_apply_before_predicate() {
        let answer = retrieve_things(Some("thingId,attributes/room"))
            .answer()
            .with_response(|f| f.retrieved(&things()))
            .unwrap()
            .build()
            .unwrap();

        let payload = answer.response().unwrap().as_success().unwrap().payload().unwrap();
        assert_eq!(payload[0], json!({ "thingId": "ns:a", "attributes": { "room": "kitchen" } }));
        assert_eq!(payload[1], json!({ "thingId": "ns:b" }));
    }
}
