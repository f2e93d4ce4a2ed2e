use crate::category::Category;
use crate::factory::{
    EventFactory, ResponseFactory, feature_definition_path, feature_path, features_path,
};
use twin_domain::command::types;
use twin_domain::domain_event::{Event, EventAction, EventSubject};
use twin_domain::exception::{ErrorClass, ThingException};
use twin_domain::response::Response;
use twin_domain::thing::{Feature, FeatureDefinition, Features, features_to_json};

live_command! {
    /// 替换全部特性
    modify ModifyFeaturesLiveCommand(ModifyFeatures) => types::MODIFY_FEATURES, Category::Modify;
    { features: Features }
}

live_command! {
    modify DeleteFeaturesLiveCommand(DeleteFeatures) => types::DELETE_FEATURES, Category::Delete;
    {}
}

live_command! {
    /// 替换单个特性
    modify ModifyFeatureLiveCommand(ModifyFeature) => types::MODIFY_FEATURE, Category::Modify;
    { feature_id: String, feature: Feature }
}

live_command! {
    modify DeleteFeatureLiveCommand(DeleteFeature) => types::DELETE_FEATURE, Category::Delete;
    { feature_id: String }
}

live_command! {
    /// 替换特性定义
    modify ModifyFeatureDefinitionLiveCommand(ModifyFeatureDefinition)
        => types::MODIFY_FEATURE_DEFINITION, Category::Modify;
    { feature_id: String, definition: FeatureDefinition }
}

live_command! {
    modify DeleteFeatureDefinitionLiveCommand(DeleteFeatureDefinition)
        => types::DELETE_FEATURE_DEFINITION, Category::Delete;
    { feature_id: String }
}

impl ModifyFeaturesLiveCommand {
    pub fn features(&self) -> &Features {
        &self.features
    }
}

impl ModifyFeatureLiveCommand {
    pub fn feature_id(&self) -> &str {
        &self.feature_id
    }

    pub fn feature(&self) -> &Feature {
        &self.feature
    }
}

impl DeleteFeatureLiveCommand {
    pub fn feature_id(&self) -> &str {
        &self.feature_id
    }
}

impl ModifyFeatureDefinitionLiveCommand {
    pub fn feature_id(&self) -> &str {
        &self.feature_id
    }

    pub fn definition(&self) -> &FeatureDefinition {
        &self.definition
    }
}

impl DeleteFeatureDefinitionLiveCommand {
    pub fn feature_id(&self) -> &str {
        &self.feature_id
    }
}

// --- ModifyFeatures ---

impl ResponseFactory<'_, ModifyFeaturesLiveCommand> {
    pub fn created(&self) -> Response {
        self.respond_created(features_path(), features_to_json(&self.command().features))
    }

    pub fn modified(&self) -> Response {
        self.respond_no_content(features_path())
    }

    pub fn features_not_accessible_error(&self) -> Response {
        self.respond_error(ThingException::features(ErrorClass::NotAccessible, self.thing_id()))
    }

    pub fn features_not_modifiable_error(&self) -> Response {
        self.respond_error(ThingException::features(ErrorClass::NotModifiable, self.thing_id()))
    }
}

impl EventFactory<'_, ModifyFeaturesLiveCommand> {
    pub fn created(&self) -> Event {
        let features = features_to_json(&self.command().features);
        self.emit(
            EventSubject::Features,
            EventAction::Created,
            features_path(),
            Some(features),
        )
    }

    pub fn modified(&self) -> Event {
        let features = features_to_json(&self.command().features);
        self.emit(
            EventSubject::Features,
            EventAction::Modified,
            features_path(),
            Some(features),
        )
    }
}

// --- DeleteFeatures ---

impl ResponseFactory<'_, DeleteFeaturesLiveCommand> {
    pub fn deleted(&self) -> Response {
        self.respond_no_content(features_path())
    }

    pub fn features_not_accessible_error(&self) -> Response {
        self.respond_error(ThingException::features(ErrorClass::NotAccessible, self.thing_id()))
    }

    pub fn features_not_modifiable_error(&self) -> Response {
        self.respond_error(ThingException::features(ErrorClass::NotModifiable, self.thing_id()))
    }
}

impl EventFactory<'_, DeleteFeaturesLiveCommand> {
    pub fn deleted(&self) -> Event {
        self.emit(
            EventSubject::Features,
            EventAction::Deleted,
            features_path(),
            None,
        )
    }
}

// --- ModifyFeature ---

impl ResponseFactory<'_, ModifyFeatureLiveCommand> {
    pub fn created(&self) -> Response {
        let command = self.command();
        self.respond_created(feature_path(&command.feature_id), command.feature.to_json())
    }

    pub fn modified(&self) -> Response {
        self.respond_no_content(feature_path(&self.command().feature_id))
    }

    pub fn feature_not_accessible_error(&self) -> Response {
        self.respond_error(ThingException::feature(
            ErrorClass::NotAccessible,
            self.thing_id(),
            self.command().feature_id.clone(),
        ))
    }

    pub fn feature_not_modifiable_error(&self) -> Response {
        self.respond_error(ThingException::feature(
            ErrorClass::NotModifiable,
            self.thing_id(),
            self.command().feature_id.clone(),
        ))
    }
}

impl EventFactory<'_, ModifyFeatureLiveCommand> {
    pub fn created(&self) -> Event {
        let command = self.command();
        self.emit(
            EventSubject::Feature,
            EventAction::Created,
            feature_path(&command.feature_id),
            Some(command.feature.to_json()),
        )
    }

    pub fn modified(&self) -> Event {
        let command = self.command();
        self.emit(
            EventSubject::Feature,
            EventAction::Modified,
            feature_path(&command.feature_id),
            Some(command.feature.to_json()),
        )
    }
}

// --- DeleteFeature ---

impl ResponseFactory<'_, DeleteFeatureLiveCommand> {
    pub fn deleted(&self) -> Response {
        self.respond_no_content(feature_path(&self.command().feature_id))
    }

    pub fn feature_not_accessible_error(&self) -> Response {
        self.respond_error(ThingException::feature(
            ErrorClass::NotAccessible,
            self.thing_id(),
            self.command().feature_id.clone(),
        ))
    }

    pub fn feature_not_modifiable_error(&self) -> Response {
        self.respond_error(ThingException::feature(
            ErrorClass::NotModifiable,
            self.thing_id(),
            self.command().feature_id.clone(),
        ))
    }
}

impl EventFactory<'_, DeleteFeatureLiveCommand> {
    pub fn deleted(&self) -> Event {
        self.emit(
            EventSubject::Feature,
            EventAction::Deleted,
            feature_path(&self.command().feature_id),
            None,
        )
    }
}

// --- ModifyFeatureDefinition ---

impl ResponseFactory<'_, ModifyFeatureDefinitionLiveCommand> {
    pub fn created(&self) -> Response {
        let command = self.command();
        self.respond_created(
            feature_definition_path(&command.feature_id),
            command.definition.to_json(),
        )
    }

    pub fn modified(&self) -> Response {
        self.respond_no_content(feature_definition_path(&self.command().feature_id))
    }

    pub fn feature_definition_not_accessible_error(&self) -> Response {
        self.respond_error(ThingException::feature_definition(
            ErrorClass::NotAccessible,
            self.thing_id(),
            self.command().feature_id.clone(),
        ))
    }

    pub fn feature_definition_not_modifiable_error(&self) -> Response {
        self.respond_error(ThingException::feature_definition(
            ErrorClass::NotModifiable,
            self.thing_id(),
            self.command().feature_id.clone(),
        ))
    }
}

impl EventFactory<'_, ModifyFeatureDefinitionLiveCommand> {
    pub fn created(&self) -> Event {
        let command = self.command();
        self.emit(
            EventSubject::FeatureDefinition,
            EventAction::Created,
            feature_definition_path(&command.feature_id),
            Some(command.definition.to_json()),
        )
    }

    pub fn modified(&self) -> Event {
        let command = self.command();
        self.emit(
            EventSubject::FeatureDefinition,
            EventAction::Modified,
            feature_definition_path(&command.feature_id),
            Some(command.definition.to_json()),
        )
    }
}

// --- DeleteFeatureDefinition ---

impl ResponseFactory<'_, DeleteFeatureDefinitionLiveCommand> {
    pub fn deleted(&self) -> Response {
        self.respond_no_content(feature_definition_path(&self.command().feature_id))
    }

    pub fn feature_definition_not_accessible_error(&self) -> Response {
        self.respond_error(ThingException::feature_definition(
            ErrorClass::NotAccessible,
            self.thing_id(),
            self.command().feature_id.clone(),
        ))
    }

    pub fn feature_definition_not_modifiable_error(&self) -> Response {
        self.respond_error(ThingException::feature_definition(
            ErrorClass::NotModifiable,
            self.thing_id(),
            self.command().feature_id.clone(),
        ))
    }
}

impl EventFactory<'_, DeleteFeatureDefinitionLiveCommand> {
    pub fn deleted(&self) -> Event {
        self.emit(
            EventSubject::FeatureDefinition,
            EventAction::Deleted,
            feature_definition_path(&self.command().feature_id),
            None,
        )
    }
}
