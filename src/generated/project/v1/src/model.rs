// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The request and response messages of the Projects API.
//!
//! Response messages accept unknown fields and missing fields, this keeps the
//! library working when the service adds new fields. Request messages only
//! serialize the fields sent in the request body. Fields sent in the request
//! path, the query string, or as headers are never serialized.

/// A free-form JSON object.
pub type JsonObject = serde_json::Map<std::string::String, serde_json::Value>;

// Accessors for messages with a flattened `additional_properties` field.
macro_rules! additional_properties {
    ($name:ident) => {
        impl $name {
            /// Returns the value of the property named `key`, if present.
            pub fn get_property(&self, key: &str) -> std::option::Option<&serde_json::Value> {
                self.additional_properties.get(key)
            }

            /// Sets the property named `key`, replacing any prior value.
            pub fn set_property<K, V>(mut self, key: K, value: V) -> Self
            where
                K: std::convert::Into<std::string::String>,
                V: std::convert::Into<serde_json::Value>,
            {
                self.additional_properties.insert(key.into(), value.into());
                self
            }

            /// Returns all the properties not described by the schema.
            pub fn properties(&self) -> &crate::model::JsonObject {
                &self.additional_properties
            }

            /// Replaces all the properties not described by the schema.
            pub fn set_properties<T: std::convert::Into<crate::model::JsonObject>>(
                mut self,
                v: T,
            ) -> Self {
                self.additional_properties = v.into();
                self
            }
        }
    };
}

/// The values of [InputVariable::type][crate::model::InputVariable::type].
pub mod input_variable_type {
    pub const ARRAY: &str = "array";
    pub const BOOLEAN: &str = "boolean";
    pub const FLOAT: &str = "float";
    pub const INT: &str = "int";
    pub const NUMBER: &str = "number";
    pub const OBJECT: &str = "object";
    pub const PASSWORD: &str = "password";
    pub const STRING: &str = "string";
}

/// The values of [JsonPatchOperation::op][crate::model::JsonPatchOperation::op].
pub mod json_patch_op {
    pub const ADD: &str = "add";
    pub const COPY: &str = "copy";
    pub const MOVE: &str = "move";
    pub const REMOVE: &str = "remove";
    pub const REPLACE: &str = "replace";
    pub const TEST: &str = "test";
}

/// The configuration versions accepted by `list_configs()`, `get_config()`,
/// `check_config()` and `get_cost_estimate()`.
pub mod config_version {
    pub const ACTIVE: &str = "active";
    pub const DRAFT: &str = "draft";
    pub const MIXED: &str = "mixed";
}

/// The actions accepted by `create_draft_action()`.
pub mod draft_action {
    pub const DISCARD: &str = "discard";
    pub const MERGE: &str = "merge";
}

/// The actions accepted by `get_schematics_job()`.
pub mod job_action {
    pub const INSTALL: &str = "install";
    pub const PLAN: &str = "plan";
    pub const UNINSTALL: &str = "uninstall";
}

/// The kind of a [ProjectConfig] and the fields specific to that kind.
///
/// On the wire the kind is the `type` field of the configuration.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ConfigDefinition {
    /// A configuration managed outside of the service.
    Manual,
    /// A configuration deployed from a Schematics blueprint.
    SchematicsBlueprint(TemplateDefinition),
    /// A configuration deployed from a Terraform template.
    TerraformTemplate(TemplateDefinition),
}

impl ConfigDefinition {
    /// The value of the `type` field for this kind.
    pub fn config_type(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::SchematicsBlueprint(_) => "schematics_blueprint",
            Self::TerraformTemplate(_) => "terraform_template",
        }
    }

    /// The input variables, empty for manual configurations.
    pub fn input(&self) -> &[InputVariable] {
        match self {
            Self::Manual => &[],
            Self::SchematicsBlueprint(t) | Self::TerraformTemplate(t) => &t.input,
        }
    }
}

/// The fields of template based configurations.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TemplateDefinition {
    /// The input variables of the template.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub input: std::vec::Vec<crate::model::InputVariable>,
}

impl TemplateDefinition {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [input][crate::model::TemplateDefinition::input].
    pub fn set_input<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::InputVariable>,
    {
        use std::iter::Iterator;
        self.input = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

// Emits an `add` operation for each field in `order` with a non-empty value.
fn add_operations(mut fields: JsonObject, order: &[&str]) -> std::vec::Vec<JsonPatchOperation> {
    order
        .iter()
        .filter_map(|name| {
            let value = fields.remove(*name)?;
            let empty = match &value {
                serde_json::Value::Null => true,
                serde_json::Value::String(s) => s.is_empty(),
                serde_json::Value::Array(a) => a.is_empty(),
                serde_json::Value::Object(o) => o.is_empty(),
                _ => false,
            };
            (!empty).then(|| add_operation(name, value))
        })
        .collect()
}

fn add_operation(name: &str, value: serde_json::Value) -> JsonPatchOperation {
    JsonPatchOperation::new()
        .set_op(json_patch_op::ADD)
        .set_path(format!("/{name}"))
        .set_value(value)
}

impl ProjectUpdate {
    /// Converts the update to a JSON patch, one `add` operation per field set.
    pub fn to_patch(&self) -> std::vec::Vec<JsonPatchOperation> {
        [("name", &self.name), ("description", &self.description)]
            .into_iter()
            .filter_map(|(name, value)| {
                value
                    .as_ref()
                    .map(|v| add_operation(name, serde_json::Value::String(v.clone())))
            })
            .collect()
    }
}

impl UpdateResult {
    /// Converts the properties to a JSON patch, one `add` operation per
    /// property, in key order.
    pub fn to_patch(&self) -> std::vec::Vec<JsonPatchOperation> {
        let mut keys = self.additional_properties.keys().collect::<std::vec::Vec<_>>();
        keys.sort();
        keys.into_iter()
            .filter_map(|k| {
                self.additional_properties
                    .get(k)
                    .map(|v| add_operation(k, v.clone()))
            })
            .collect()
    }
}

impl ProjectListResponseSchema {
    /// Returns the cursor for the next page of results.
    ///
    /// Returns `None` on the last page. Uses `next.start` when the service
    /// provides it, otherwise the `start` query parameter of `next.href`.
    pub fn get_next_start(&self) -> std::option::Option<std::string::String> {
        let next = self.next.as_ref()?;
        next.start
            .clone()
            .or_else(|| start_from_href(&next.href))
            .filter(|s| !s.is_empty())
    }
}

fn start_from_href(href: &str) -> std::option::Option<std::string::String> {
    let (_, query) = href.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == "start")
        .map(|(_, value)| {
            let value = value.replace('+', " ");
            percent_encoding::percent_decode_str(&value)
                .decode_utf8_lossy()
                .into_owned()
        })
}

/// A project configuration.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ProjectConfig {
    /// The unique ID of the configuration.
    pub id: std::option::Option<std::string::String>,

    /// The configuration name.
    pub name: std::string::String,

    /// The configuration labels.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub labels: std::vec::Vec<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    /// The location ID of the configuration in the catalog.
    pub locator_id: std::string::String,

    /// The outputs of the last deployment.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub output: std::vec::Vec<crate::model::OutputValue>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub setting: std::vec::Vec<crate::model::ConfigSettingItems>,

    /// The kind of configuration and its kind-specific fields.
    ///
    /// This is `None` if the service omits the type, or uses a type unknown to
    /// this library.
    #[serialize_always]
    #[serde(flatten, deserialize_with = "deserialize_definition")]
    pub definition: std::option::Option<crate::model::ConfigDefinition>,
}

// Unknown or missing `type` values yield `None`. The fields of a known type
// must decode.
fn deserialize_definition<'de, D>(
    deserializer: D,
) -> std::result::Result<std::option::Option<ConfigDefinition>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    use serde::de::Error;
    let fields = JsonObject::deserialize(deserializer)?;
    match fields.get("type").and_then(serde_json::Value::as_str) {
        Some("manual" | "schematics_blueprint" | "terraform_template") => {
            serde_json::from_value(serde_json::Value::Object(fields))
                .map(Some)
                .map_err(D::Error::custom)
        }
        _ => Ok(None),
    }
}

impl ProjectConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::ProjectConfig::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::ProjectConfig::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::ProjectConfig::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [labels][crate::model::ProjectConfig::labels].
    pub fn set_labels<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [description][crate::model::ProjectConfig::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::ProjectConfig::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [locator_id][crate::model::ProjectConfig::locator_id].
    pub fn set_locator_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.locator_id = v.into();
        self
    }

    /// Sets the value of [output][crate::model::ProjectConfig::output].
    pub fn set_output<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::OutputValue>,
    {
        use std::iter::Iterator;
        self.output = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [setting][crate::model::ProjectConfig::setting].
    pub fn set_setting<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ConfigSettingItems>,
    {
        use std::iter::Iterator;
        self.setting = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [definition][crate::model::ProjectConfig::definition].
    pub fn set_definition<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ConfigDefinition>,
    {
        self.definition = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [definition][crate::model::ProjectConfig::definition].
    pub fn set_or_clear_definition<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ConfigDefinition>,
    {
        self.definition = v.map(|x| x.into());
        self
    }

    /// Converts the configuration to a JSON patch.
    ///
    /// The patch contains one `add` operation for each field with a value,
    /// in the order the fields are declared.
    pub fn to_patch(&self) -> serde_json::Result<std::vec::Vec<crate::model::JsonPatchOperation>> {
        const FIELDS: [&str; 9] = [
            "id",
            "name",
            "labels",
            "description",
            "locator_id",
            "type",
            "input",
            "output",
            "setting",
        ];
        match serde_json::to_value(self)? {
            serde_json::Value::Object(fields) => Ok(add_operations(fields, &FIELDS)),
            _ => Ok(std::vec::Vec::new()),
        }
    }
}

/// The state of a service instance, as reported by the broker.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct BrokerResult {
    /// Indicates whether the service instance is active.
    pub active: std::option::Option<std::string::String>,

    /// Indicates whether the service instance is enabled.
    pub enabled: std::option::Option<std::string::String>,

    /// The last time the service instance was active.
    pub last_active: std::option::Option<std::string::String>,
}

impl BrokerResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [active][crate::model::BrokerResult::active].
    pub fn set_active<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.active = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [active][crate::model::BrokerResult::active].
    pub fn set_or_clear_active<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.active = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enabled][crate::model::BrokerResult::enabled].
    pub fn set_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enabled][crate::model::BrokerResult::enabled].
    pub fn set_or_clear_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [last_active][crate::model::BrokerResult::last_active].
    pub fn set_last_active<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.last_active = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [last_active][crate::model::BrokerResult::last_active].
    pub fn set_or_clear_last_active<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.last_active = v.map(|x| x.into());
        self
    }
}

/// The service broker catalog.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CatalogResponse {
    /// The services offered by the broker.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub services: std::vec::Vec<crate::model::CatalogResponseServices>,
}

impl CatalogResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [services][crate::model::CatalogResponse::services].
    pub fn set_services<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::CatalogResponseServices>,
    {
        use std::iter::Iterator;
        self.services = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A service offered by the broker.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CatalogResponseServices {
    /// Whether the service supports bindings.
    pub bindable: std::option::Option<bool>,

    /// The service description.
    pub description: std::option::Option<std::string::String>,

    /// The service ID.
    pub id: std::option::Option<std::string::String>,

    pub metadata: std::option::Option<crate::model::CatalogResponseServicesMetadata>,

    /// The service name.
    pub name: std::option::Option<std::string::String>,

    /// Whether the plan of a service instance can be updated.
    pub plan_updateable: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tags: std::vec::Vec<std::string::String>,

    /// The plans offered by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub plans: std::vec::Vec<crate::model::CatalogResponseServicesPlans>,
}

impl CatalogResponseServices {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bindable][crate::model::CatalogResponseServices::bindable].
    pub fn set_bindable<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.bindable = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bindable][crate::model::CatalogResponseServices::bindable].
    pub fn set_or_clear_bindable<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.bindable = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::CatalogResponseServices::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::CatalogResponseServices::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::CatalogResponseServices::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::CatalogResponseServices::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metadata][crate::model::CatalogResponseServices::metadata].
    pub fn set_metadata<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CatalogResponseServicesMetadata>,
    {
        self.metadata = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [metadata][crate::model::CatalogResponseServices::metadata].
    pub fn set_or_clear_metadata<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::CatalogResponseServicesMetadata>,
    {
        self.metadata = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::CatalogResponseServices::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::CatalogResponseServices::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [plan_updateable][crate::model::CatalogResponseServices::plan_updateable].
    pub fn set_plan_updateable<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.plan_updateable = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [plan_updateable][crate::model::CatalogResponseServices::plan_updateable].
    pub fn set_or_clear_plan_updateable<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.plan_updateable = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][crate::model::CatalogResponseServices::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.tags = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [plans][crate::model::CatalogResponseServices::plans].
    pub fn set_plans<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::CatalogResponseServicesPlans>,
    {
        use std::iter::Iterator;
        self.plans = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Presentation metadata for a catalog service.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CatalogResponseServicesMetadata {
    pub display_name: std::option::Option<std::string::String>,

    pub documentation_url: std::option::Option<std::string::String>,

    pub image_url: std::option::Option<std::string::String>,

    pub instructions_url: std::option::Option<std::string::String>,

    pub long_description: std::option::Option<std::string::String>,

    pub provider_display_name: std::option::Option<std::string::String>,

    pub support_url: std::option::Option<std::string::String>,

    pub terms_url: std::option::Option<std::string::String>,
}

impl CatalogResponseServicesMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][crate::model::CatalogResponseServicesMetadata::display_name].
    pub fn set_display_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [display_name][crate::model::CatalogResponseServicesMetadata::display_name].
    pub fn set_or_clear_display_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.display_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [documentation_url][crate::model::CatalogResponseServicesMetadata::documentation_url].
    pub fn set_documentation_url<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.documentation_url = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [documentation_url][crate::model::CatalogResponseServicesMetadata::documentation_url].
    pub fn set_or_clear_documentation_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.documentation_url = v.map(|x| x.into());
        self
    }

    /// Sets the value of [image_url][crate::model::CatalogResponseServicesMetadata::image_url].
    pub fn set_image_url<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.image_url = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [image_url][crate::model::CatalogResponseServicesMetadata::image_url].
    pub fn set_or_clear_image_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.image_url = v.map(|x| x.into());
        self
    }

    /// Sets the value of [instructions_url][crate::model::CatalogResponseServicesMetadata::instructions_url].
    pub fn set_instructions_url<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.instructions_url = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [instructions_url][crate::model::CatalogResponseServicesMetadata::instructions_url].
    pub fn set_or_clear_instructions_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.instructions_url = v.map(|x| x.into());
        self
    }

    /// Sets the value of [long_description][crate::model::CatalogResponseServicesMetadata::long_description].
    pub fn set_long_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.long_description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [long_description][crate::model::CatalogResponseServicesMetadata::long_description].
    pub fn set_or_clear_long_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.long_description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [provider_display_name][crate::model::CatalogResponseServicesMetadata::provider_display_name].
    pub fn set_provider_display_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.provider_display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [provider_display_name][crate::model::CatalogResponseServicesMetadata::provider_display_name].
    pub fn set_or_clear_provider_display_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.provider_display_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [support_url][crate::model::CatalogResponseServicesMetadata::support_url].
    pub fn set_support_url<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.support_url = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [support_url][crate::model::CatalogResponseServicesMetadata::support_url].
    pub fn set_or_clear_support_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.support_url = v.map(|x| x.into());
        self
    }

    /// Sets the value of [terms_url][crate::model::CatalogResponseServicesMetadata::terms_url].
    pub fn set_terms_url<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.terms_url = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [terms_url][crate::model::CatalogResponseServicesMetadata::terms_url].
    pub fn set_or_clear_terms_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.terms_url = v.map(|x| x.into());
        self
    }
}

/// A plan offered by a catalog service.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CatalogResponseServicesPlans {
    pub description: std::option::Option<std::string::String>,

    /// Whether the plan is free of charge.
    pub free: std::option::Option<bool>,

    pub id: std::option::Option<std::string::String>,

    pub metadata: std::option::Option<crate::model::CatalogResponseServicesPlansMetadata>,

    pub name: std::option::Option<std::string::String>,
}

impl CatalogResponseServicesPlans {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [description][crate::model::CatalogResponseServicesPlans::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::CatalogResponseServicesPlans::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [free][crate::model::CatalogResponseServicesPlans::free].
    pub fn set_free<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.free = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [free][crate::model::CatalogResponseServicesPlans::free].
    pub fn set_or_clear_free<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.free = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::CatalogResponseServicesPlans::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::CatalogResponseServicesPlans::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metadata][crate::model::CatalogResponseServicesPlans::metadata].
    pub fn set_metadata<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CatalogResponseServicesPlansMetadata>,
    {
        self.metadata = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [metadata][crate::model::CatalogResponseServicesPlans::metadata].
    pub fn set_or_clear_metadata<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::CatalogResponseServicesPlansMetadata>,
    {
        self.metadata = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::CatalogResponseServicesPlans::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::CatalogResponseServicesPlans::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CatalogResponseServicesPlansMetadata {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub bullets: std::vec::Vec<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,
}

impl CatalogResponseServicesPlansMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bullets][crate::model::CatalogResponseServicesPlansMetadata::bullets].
    pub fn set_bullets<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.bullets = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [display_name][crate::model::CatalogResponseServicesPlansMetadata::display_name].
    pub fn set_display_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [display_name][crate::model::CatalogResponseServicesPlansMetadata::display_name].
    pub fn set_or_clear_display_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.display_name = v.map(|x| x.into());
        self
    }
}

/// A configuration setting passed to the cart API.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ConfigSettingItems {
    /// The name of the configuration setting.
    pub name: std::string::String,

    /// The value of the configuration setting.
    pub value: std::string::String,
}

impl ConfigSettingItems {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::ConfigSettingItems::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [value][crate::model::ConfigSettingItems::value].
    pub fn set_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.value = v.into();
        self
    }
}

/// The result of provisioning a service instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateResult {
    /// The URL of the web-based management interface for the service instance.
    pub dashboard_url: std::option::Option<std::string::String>,

    /// The identifier of an asynchronous provisioning operation.
    pub operation: std::option::Option<std::string::String>,
}

impl CreateResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [dashboard_url][crate::model::CreateResult::dashboard_url].
    pub fn set_dashboard_url<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.dashboard_url = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [dashboard_url][crate::model::CreateResult::dashboard_url].
    pub fn set_or_clear_dashboard_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.dashboard_url = v.map(|x| x.into());
        self
    }

    /// Sets the value of [operation][crate::model::CreateResult::operation].
    pub fn set_operation<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.operation = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [operation][crate::model::CreateResult::operation].
    pub fn set_or_clear_operation<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.operation = v.map(|x| x.into());
        self
    }
}

/// An event that requires attention from the project owners.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CumulativeNeedsAttention {
    /// The event name.
    pub event: std::option::Option<std::string::String>,

    /// The unique ID of the event.
    pub event_id: std::option::Option<std::string::String>,

    /// The configuration that triggered the event.
    pub config_id: std::option::Option<std::string::String>,

    /// The version of the configuration that triggered the event.
    pub config_version: std::option::Option<i64>,
}

impl CumulativeNeedsAttention {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [event][crate::model::CumulativeNeedsAttention::event].
    pub fn set_event<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.event = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [event][crate::model::CumulativeNeedsAttention::event].
    pub fn set_or_clear_event<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.event = v.map(|x| x.into());
        self
    }

    /// Sets the value of [event_id][crate::model::CumulativeNeedsAttention::event_id].
    pub fn set_event_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.event_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [event_id][crate::model::CumulativeNeedsAttention::event_id].
    pub fn set_or_clear_event_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.event_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [config_id][crate::model::CumulativeNeedsAttention::config_id].
    pub fn set_config_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.config_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [config_id][crate::model::CumulativeNeedsAttention::config_id].
    pub fn set_or_clear_config_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.config_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [config_version][crate::model::CumulativeNeedsAttention::config_version].
    pub fn set_config_version<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.config_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [config_version][crate::model::CumulativeNeedsAttention::config_version].
    pub fn set_or_clear_config_version<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.config_version = v.map(|x| x.into());
        self
    }
}

/// The response to a configuration deletion.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteProjectConfigResponse {
    /// The ID of the deleted configuration.
    pub id: std::option::Option<std::string::String>,

    /// The name of the deleted configuration.
    pub name: std::option::Option<std::string::String>,
}

impl DeleteProjectConfigResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::DeleteProjectConfigResponse::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::DeleteProjectConfigResponse::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::DeleteProjectConfigResponse::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::DeleteProjectConfigResponse::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }
}

/// A Schematics job.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GetActionJobResponse {
    /// The unique ID of the job.
    pub id: std::option::Option<std::string::String>,
}

impl GetActionJobResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::GetActionJobResponse::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::GetActionJobResponse::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }
}

/// An event notifications integration.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GetEventNotificationsIntegrationResponse {
    pub description: std::option::Option<std::string::String>,

    /// The name of the Event Notifications source.
    pub name: std::option::Option<std::string::String>,

    pub enabled: std::option::Option<bool>,

    /// The Event Notifications source ID.
    pub id: std::option::Option<std::string::String>,

    /// The type of the source.
    pub r#type: std::option::Option<std::string::String>,

    /// The last time the source was updated.
    pub updated_at: std::option::Option<std::string::String>,

    /// The number of topics using this source.
    pub topic_count: std::option::Option<i64>,

    /// The names of the topics using this source.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub topic_names: std::vec::Vec<std::string::String>,
}

impl GetEventNotificationsIntegrationResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [description][crate::model::GetEventNotificationsIntegrationResponse::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::GetEventNotificationsIntegrationResponse::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::GetEventNotificationsIntegrationResponse::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::GetEventNotificationsIntegrationResponse::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enabled][crate::model::GetEventNotificationsIntegrationResponse::enabled].
    pub fn set_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enabled][crate::model::GetEventNotificationsIntegrationResponse::enabled].
    pub fn set_or_clear_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::GetEventNotificationsIntegrationResponse::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::GetEventNotificationsIntegrationResponse::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type][crate::model::GetEventNotificationsIntegrationResponse::type].
    pub fn set_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [type][crate::model::GetEventNotificationsIntegrationResponse::type].
    pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.r#type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [updated_at][crate::model::GetEventNotificationsIntegrationResponse::updated_at].
    pub fn set_updated_at<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.updated_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [updated_at][crate::model::GetEventNotificationsIntegrationResponse::updated_at].
    pub fn set_or_clear_updated_at<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.updated_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [topic_count][crate::model::GetEventNotificationsIntegrationResponse::topic_count].
    pub fn set_topic_count<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.topic_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [topic_count][crate::model::GetEventNotificationsIntegrationResponse::topic_count].
    pub fn set_or_clear_topic_count<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.topic_count = v.map(|x| x.into());
        self
    }

    /// Sets the value of [topic_names][crate::model::GetEventNotificationsIntegrationResponse::topic_names].
    pub fn set_topic_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.topic_names = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The state of the last operation on a service instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GetLastOperationResult {
    /// The state of the operation, for example `in progress` or `succeeded`.
    pub state: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,
}

impl GetLastOperationResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [state][crate::model::GetLastOperationResult::state].
    pub fn set_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [state][crate::model::GetLastOperationResult::state].
    pub fn set_or_clear_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.state = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::GetLastOperationResult::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::GetLastOperationResult::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }
}

/// The notifications of a project.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GetNotificationsResponse {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub notifications: std::vec::Vec<crate::model::NotificationEventWithId>,
}

impl GetNotificationsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [notifications][crate::model::GetNotificationsResponse::notifications].
    pub fn set_notifications<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::NotificationEventWithId>,
    {
        use std::iter::Iterator;
        self.notifications = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A project.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GetProjectResponse {
    /// The project name.
    pub name: std::string::String,

    /// The project description.
    pub description: std::option::Option<std::string::String>,

    /// The unique ID of the project.
    pub id: std::option::Option<std::string::String>,

    /// The cloud resource name of the project.
    pub crn: std::option::Option<std::string::String>,

    /// The project configurations.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub configs: std::vec::Vec<crate::model::ProjectConfig>,

    pub metadata: std::option::Option<crate::model::ProjectMetadata>,
}

impl GetProjectResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetProjectResponse::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [description][crate::model::GetProjectResponse::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::GetProjectResponse::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::GetProjectResponse::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::GetProjectResponse::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [crn][crate::model::GetProjectResponse::crn].
    pub fn set_crn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.crn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [crn][crate::model::GetProjectResponse::crn].
    pub fn set_or_clear_crn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.crn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [configs][crate::model::GetProjectResponse::configs].
    pub fn set_configs<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ProjectConfig>,
    {
        use std::iter::Iterator;
        self.configs = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [metadata][crate::model::GetProjectResponse::metadata].
    pub fn set_metadata<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ProjectMetadata>,
    {
        self.metadata = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [metadata][crate::model::GetProjectResponse::metadata].
    pub fn set_or_clear_metadata<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ProjectMetadata>,
    {
        self.metadata = v.map(|x| x.into());
        self
    }
}

/// The health of the service.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Health {
    /// The service name.
    pub name: std::option::Option<std::string::String>,

    /// The service version.
    pub version: std::option::Option<std::string::String>,

    /// The health of the service dependencies.
    pub dependencies: std::option::Option<crate::model::JsonObject>,
}

impl Health {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Health::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Health::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [version][crate::model::Health::version].
    pub fn set_version<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.version = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [version][crate::model::Health::version].
    pub fn set_or_clear_version<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.version = v.map(|x| x.into());
        self
    }

    /// Sets the value of [dependencies][crate::model::Health::dependencies].
    pub fn set_dependencies<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::JsonObject>,
    {
        self.dependencies = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [dependencies][crate::model::Health::dependencies].
    pub fn set_or_clear_dependencies<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::JsonObject>,
    {
        self.dependencies = v.map(|x| x.into());
        self
    }
}

/// An input variable of a configuration.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct InputVariable {
    /// The variable name.
    pub name: std::string::String,

    /// The variable type, see [input_variable_type].
    pub r#type: std::string::String,

    /// Whether the variable is required.
    pub required: std::option::Option<bool>,
}

impl InputVariable {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::InputVariable::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [type][crate::model::InputVariable::type].
    pub fn set_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [required][crate::model::InputVariable::required].
    pub fn set_required<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.required = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [required][crate::model::InputVariable::required].
    pub fn set_or_clear_required<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.required = v.map(|x| x.into());
        self
    }
}

/// An input variable used when creating a configuration.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct InputVariableInput {
    /// The variable name.
    pub name: std::string::String,
}

impl InputVariableInput {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::InputVariableInput::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// A [JSON patch] operation.
///
/// [JSON patch]: https://datatracker.ietf.org/doc/html/rfc6902
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct JsonPatchOperation {
    /// The operation to perform, see [json_patch_op].
    pub op: std::string::String,

    /// The JSON pointer to the target location.
    pub path: std::string::String,

    /// The source location for `copy` and `move` operations.
    pub from: std::option::Option<std::string::String>,

    /// The value used by `add`, `replace` and `test` operations.
    pub value: std::option::Option<serde_json::Value>,
}

impl JsonPatchOperation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [op][crate::model::JsonPatchOperation::op].
    pub fn set_op<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.op = v.into();
        self
    }

    /// Sets the value of [path][crate::model::JsonPatchOperation::path].
    pub fn set_path<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.path = v.into();
        self
    }

    /// Sets the value of [from][crate::model::JsonPatchOperation::from].
    pub fn set_from<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.from = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [from][crate::model::JsonPatchOperation::from].
    pub fn set_or_clear_from<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.from = v.map(|x| x.into());
        self
    }

    /// Sets the value of [value][crate::model::JsonPatchOperation::value].
    pub fn set_value<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<serde_json::Value>,
    {
        self.value = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [value][crate::model::JsonPatchOperation::value].
    pub fn set_or_clear_value<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<serde_json::Value>,
    {
        self.value = v.map(|x| x.into());
        self
    }
}

/// A notification posted to a project.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct NotificationEvent {
    /// The event name.
    pub event: std::string::String,

    /// The target of the event.
    pub target: std::string::String,

    pub source: std::option::Option<std::string::String>,

    /// The user or service that triggered the event.
    pub triggered_by: std::option::Option<std::string::String>,

    /// A URL where the event can be acted upon.
    pub action_url: std::option::Option<std::string::String>,

    /// Free-form data attached to the event.
    pub data: std::option::Option<crate::model::JsonObject>,
}

impl NotificationEvent {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [event][crate::model::NotificationEvent::event].
    pub fn set_event<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.event = v.into();
        self
    }

    /// Sets the value of [target][crate::model::NotificationEvent::target].
    pub fn set_target<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.target = v.into();
        self
    }

    /// Sets the value of [source][crate::model::NotificationEvent::source].
    pub fn set_source<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source][crate::model::NotificationEvent::source].
    pub fn set_or_clear_source<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source = v.map(|x| x.into());
        self
    }

    /// Sets the value of [triggered_by][crate::model::NotificationEvent::triggered_by].
    pub fn set_triggered_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.triggered_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [triggered_by][crate::model::NotificationEvent::triggered_by].
    pub fn set_or_clear_triggered_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.triggered_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [action_url][crate::model::NotificationEvent::action_url].
    pub fn set_action_url<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.action_url = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [action_url][crate::model::NotificationEvent::action_url].
    pub fn set_or_clear_action_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.action_url = v.map(|x| x.into());
        self
    }

    /// Sets the value of [data][crate::model::NotificationEvent::data].
    pub fn set_data<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::JsonObject>,
    {
        self.data = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [data][crate::model::NotificationEvent::data].
    pub fn set_or_clear_data<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::JsonObject>,
    {
        self.data = v.map(|x| x.into());
        self
    }
}

/// A notification stored in a project.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct NotificationEventWithId {
    pub event: std::string::String,

    pub target: std::string::String,

    pub source: std::option::Option<std::string::String>,

    pub triggered_by: std::option::Option<std::string::String>,

    pub action_url: std::option::Option<std::string::String>,

    pub data: std::option::Option<crate::model::JsonObject>,

    /// The unique ID of the notification.
    pub id: std::string::String,
}

impl NotificationEventWithId {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [event][crate::model::NotificationEventWithId::event].
    pub fn set_event<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.event = v.into();
        self
    }

    /// Sets the value of [target][crate::model::NotificationEventWithId::target].
    pub fn set_target<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.target = v.into();
        self
    }

    /// Sets the value of [source][crate::model::NotificationEventWithId::source].
    pub fn set_source<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source][crate::model::NotificationEventWithId::source].
    pub fn set_or_clear_source<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source = v.map(|x| x.into());
        self
    }

    /// Sets the value of [triggered_by][crate::model::NotificationEventWithId::triggered_by].
    pub fn set_triggered_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.triggered_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [triggered_by][crate::model::NotificationEventWithId::triggered_by].
    pub fn set_or_clear_triggered_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.triggered_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [action_url][crate::model::NotificationEventWithId::action_url].
    pub fn set_action_url<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.action_url = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [action_url][crate::model::NotificationEventWithId::action_url].
    pub fn set_or_clear_action_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.action_url = v.map(|x| x.into());
        self
    }

    /// Sets the value of [data][crate::model::NotificationEventWithId::data].
    pub fn set_data<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::JsonObject>,
    {
        self.data = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [data][crate::model::NotificationEventWithId::data].
    pub fn set_or_clear_data<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::JsonObject>,
    {
        self.data = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::NotificationEventWithId::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The result of posting a notification.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct NotificationEventWithStatus {
    pub event: std::string::String,

    pub target: std::string::String,

    pub source: std::option::Option<std::string::String>,

    pub triggered_by: std::option::Option<std::string::String>,

    pub action_url: std::option::Option<std::string::String>,

    pub data: std::option::Option<crate::model::JsonObject>,

    pub id: std::string::String,

    /// Whether the notification was stored.
    pub status: std::option::Option<std::string::String>,

    /// The reasons why the notification was not stored, if any.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub reasons: std::vec::Vec<crate::model::JsonObject>,
}

impl NotificationEventWithStatus {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [event][crate::model::NotificationEventWithStatus::event].
    pub fn set_event<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.event = v.into();
        self
    }

    /// Sets the value of [target][crate::model::NotificationEventWithStatus::target].
    pub fn set_target<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.target = v.into();
        self
    }

    /// Sets the value of [source][crate::model::NotificationEventWithStatus::source].
    pub fn set_source<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source][crate::model::NotificationEventWithStatus::source].
    pub fn set_or_clear_source<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source = v.map(|x| x.into());
        self
    }

    /// Sets the value of [triggered_by][crate::model::NotificationEventWithStatus::triggered_by].
    pub fn set_triggered_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.triggered_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [triggered_by][crate::model::NotificationEventWithStatus::triggered_by].
    pub fn set_or_clear_triggered_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.triggered_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [action_url][crate::model::NotificationEventWithStatus::action_url].
    pub fn set_action_url<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.action_url = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [action_url][crate::model::NotificationEventWithStatus::action_url].
    pub fn set_or_clear_action_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.action_url = v.map(|x| x.into());
        self
    }

    /// Sets the value of [data][crate::model::NotificationEventWithStatus::data].
    pub fn set_data<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::JsonObject>,
    {
        self.data = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [data][crate::model::NotificationEventWithStatus::data].
    pub fn set_or_clear_data<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::JsonObject>,
    {
        self.data = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::NotificationEventWithStatus::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [status][crate::model::NotificationEventWithStatus::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::NotificationEventWithStatus::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [reasons][crate::model::NotificationEventWithStatus::reasons].
    pub fn set_reasons<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::JsonObject>,
    {
        use std::iter::Iterator;
        self.reasons = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// An output value of a configuration.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct OutputValue {
    /// The output name.
    pub name: std::string::String,

    pub description: std::option::Option<std::string::String>,

    /// The output values.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub value: std::vec::Vec<std::string::String>,
}

impl OutputValue {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::OutputValue::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [description][crate::model::OutputValue::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::OutputValue::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [value][crate::model::OutputValue::value].
    pub fn set_value<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.value = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A link to a page of results.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PaginationLink {
    /// The URL of the page.
    pub href: std::string::String,

    /// The cursor for the page, if any.
    pub start: std::option::Option<std::string::String>,
}

impl PaginationLink {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [href][crate::model::PaginationLink::href].
    pub fn set_href<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.href = v.into();
        self
    }

    /// Sets the value of [start][crate::model::PaginationLink::start].
    pub fn set_start<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][crate::model::PaginationLink::start].
    pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = v.map(|x| x.into());
        self
    }
}

/// The event notifications integration of a project.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PostEventNotificationsIntegrationResponse {
    pub description: std::option::Option<std::string::String>,

    pub name: std::option::Option<std::string::String>,

    pub enabled: std::option::Option<bool>,

    pub id: std::option::Option<std::string::String>,

    pub r#type: std::option::Option<std::string::String>,

    /// The time the source was created.
    pub created_at: std::option::Option<std::string::String>,
}

impl PostEventNotificationsIntegrationResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [description][crate::model::PostEventNotificationsIntegrationResponse::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::PostEventNotificationsIntegrationResponse::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::PostEventNotificationsIntegrationResponse::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::PostEventNotificationsIntegrationResponse::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enabled][crate::model::PostEventNotificationsIntegrationResponse::enabled].
    pub fn set_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enabled][crate::model::PostEventNotificationsIntegrationResponse::enabled].
    pub fn set_or_clear_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::PostEventNotificationsIntegrationResponse::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::PostEventNotificationsIntegrationResponse::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type][crate::model::PostEventNotificationsIntegrationResponse::type].
    pub fn set_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [type][crate::model::PostEventNotificationsIntegrationResponse::type].
    pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.r#type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [created_at][crate::model::PostEventNotificationsIntegrationResponse::created_at].
    pub fn set_created_at<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.created_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_at][crate::model::PostEventNotificationsIntegrationResponse::created_at].
    pub fn set_or_clear_created_at<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.created_at = v.map(|x| x.into());
        self
    }
}

/// The result of posting notifications.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PostNotificationsResponse {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub notifications: std::vec::Vec<crate::model::NotificationEventWithStatus>,
}

impl PostNotificationsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [notifications][crate::model::PostNotificationsResponse::notifications].
    pub fn set_notifications<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::NotificationEventWithStatus>,
    {
        use std::iter::Iterator;
        self.notifications = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The test event sent to Event Notifications.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PostTestEventNotificationResponse {
    pub datacontenttype: std::option::Option<std::string::String>,

    /// The long description of the event.
    pub ibmendefaultlong: std::option::Option<std::string::String>,

    /// The short description of the event.
    pub ibmendefaultshort: std::option::Option<std::string::String>,

    pub ibmensourceid: std::option::Option<std::string::String>,

    pub id: std::string::String,

    pub source: std::string::String,

    pub specversion: std::option::Option<std::string::String>,

    pub r#type: std::option::Option<std::string::String>,
}

impl PostTestEventNotificationResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [datacontenttype][crate::model::PostTestEventNotificationResponse::datacontenttype].
    pub fn set_datacontenttype<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.datacontenttype = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [datacontenttype][crate::model::PostTestEventNotificationResponse::datacontenttype].
    pub fn set_or_clear_datacontenttype<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.datacontenttype = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ibmendefaultlong][crate::model::PostTestEventNotificationResponse::ibmendefaultlong].
    pub fn set_ibmendefaultlong<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ibmendefaultlong = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ibmendefaultlong][crate::model::PostTestEventNotificationResponse::ibmendefaultlong].
    pub fn set_or_clear_ibmendefaultlong<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ibmendefaultlong = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ibmendefaultshort][crate::model::PostTestEventNotificationResponse::ibmendefaultshort].
    pub fn set_ibmendefaultshort<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ibmendefaultshort = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ibmendefaultshort][crate::model::PostTestEventNotificationResponse::ibmendefaultshort].
    pub fn set_or_clear_ibmendefaultshort<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ibmendefaultshort = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ibmensourceid][crate::model::PostTestEventNotificationResponse::ibmensourceid].
    pub fn set_ibmensourceid<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ibmensourceid = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ibmensourceid][crate::model::PostTestEventNotificationResponse::ibmensourceid].
    pub fn set_or_clear_ibmensourceid<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ibmensourceid = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::PostTestEventNotificationResponse::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [source][crate::model::PostTestEventNotificationResponse::source].
    pub fn set_source<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source = v.into();
        self
    }

    /// Sets the value of [specversion][crate::model::PostTestEventNotificationResponse::specversion].
    pub fn set_specversion<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.specversion = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [specversion][crate::model::PostTestEventNotificationResponse::specversion].
    pub fn set_or_clear_specversion<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.specversion = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type][crate::model::PostTestEventNotificationResponse::type].
    pub fn set_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [type][crate::model::PostTestEventNotificationResponse::type].
    pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.r#type = v.map(|x| x.into());
        self
    }
}

/// The differences between the draft and the active version of a configuration.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ProjectConfigDiff {
    pub added: std::option::Option<crate::model::ProjectConfigDiffEntries>,

    pub changed: std::option::Option<crate::model::ProjectConfigDiffEntries>,

    pub removed: std::option::Option<crate::model::ProjectConfigDiffEntries>,
}

impl ProjectConfigDiff {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [added][crate::model::ProjectConfigDiff::added].
    pub fn set_added<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ProjectConfigDiffEntries>,
    {
        self.added = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [added][crate::model::ProjectConfigDiff::added].
    pub fn set_or_clear_added<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ProjectConfigDiffEntries>,
    {
        self.added = v.map(|x| x.into());
        self
    }

    /// Sets the value of [changed][crate::model::ProjectConfigDiff::changed].
    pub fn set_changed<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ProjectConfigDiffEntries>,
    {
        self.changed = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [changed][crate::model::ProjectConfigDiff::changed].
    pub fn set_or_clear_changed<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ProjectConfigDiffEntries>,
    {
        self.changed = v.map(|x| x.into());
        self
    }

    /// Sets the value of [removed][crate::model::ProjectConfigDiff::removed].
    pub fn set_removed<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ProjectConfigDiffEntries>,
    {
        self.removed = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [removed][crate::model::ProjectConfigDiff::removed].
    pub fn set_or_clear_removed<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ProjectConfigDiffEntries>,
    {
        self.removed = v.map(|x| x.into());
        self
    }
}

/// The input variables affected by one kind of change.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ProjectConfigDiffEntries {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub input: std::vec::Vec<crate::model::ProjectConfigDiffInputVariable>,
}

impl ProjectConfigDiffEntries {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [input][crate::model::ProjectConfigDiffEntries::input].
    pub fn set_input<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ProjectConfigDiffInputVariable>,
    {
        use std::iter::Iterator;
        self.input = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ProjectConfigDiffInputVariable {
    /// The variable name.
    pub name: std::string::String,

    /// The variable type, see [input_variable_type].
    pub r#type: std::string::String,
}

impl ProjectConfigDiffInputVariable {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::ProjectConfigDiffInputVariable::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [type][crate::model::ProjectConfigDiffInputVariable::type].
    pub fn set_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }
}

/// A configuration included in a new project.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ProjectConfigInput {
    pub id: std::option::Option<std::string::String>,

    /// The configuration name.
    pub name: std::string::String,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub labels: std::vec::Vec<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    /// The location ID of the configuration in the catalog.
    pub locator_id: std::string::String,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub input: std::vec::Vec<crate::model::InputVariableInput>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub setting: std::vec::Vec<crate::model::ConfigSettingItems>,
}

impl ProjectConfigInput {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::ProjectConfigInput::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::ProjectConfigInput::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::ProjectConfigInput::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [labels][crate::model::ProjectConfigInput::labels].
    pub fn set_labels<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [description][crate::model::ProjectConfigInput::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::ProjectConfigInput::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [locator_id][crate::model::ProjectConfigInput::locator_id].
    pub fn set_locator_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.locator_id = v.into();
        self
    }

    /// Sets the value of [input][crate::model::ProjectConfigInput::input].
    pub fn set_input<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::InputVariableInput>,
    {
        use std::iter::Iterator;
        self.input = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [setting][crate::model::ProjectConfigInput::setting].
    pub fn set_setting<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ConfigSettingItems>,
    {
        use std::iter::Iterator;
        self.setting = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The configurations of a project.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ProjectConfigList {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub configs: std::vec::Vec<crate::model::ProjectConfig>,
}

impl ProjectConfigList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [configs][crate::model::ProjectConfigList::configs].
    pub fn set_configs<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ProjectConfig>,
    {
        use std::iter::Iterator;
        self.configs = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A project, as returned by the list operation.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ProjectListItem {
    pub id: std::option::Option<std::string::String>,

    pub name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub metadata: std::option::Option<crate::model::ProjectMetadata>,
}

impl ProjectListItem {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::ProjectListItem::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::ProjectListItem::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::ProjectListItem::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::ProjectListItem::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::ProjectListItem::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::ProjectListItem::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metadata][crate::model::ProjectListItem::metadata].
    pub fn set_metadata<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ProjectMetadata>,
    {
        self.metadata = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [metadata][crate::model::ProjectListItem::metadata].
    pub fn set_or_clear_metadata<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ProjectMetadata>,
    {
        self.metadata = v.map(|x| x.into());
        self
    }
}

/// A page of projects.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ProjectListResponseSchema {
    /// The maximum number of projects in the page.
    pub limit: i64,

    /// The total number of projects.
    pub total_count: i64,

    /// The link to the first page.
    pub first: crate::model::PaginationLink,

    pub last: std::option::Option<crate::model::PaginationLink>,

    pub previous: std::option::Option<crate::model::PaginationLink>,

    /// The link to the next page, absent on the last page.
    pub next: std::option::Option<crate::model::PaginationLink>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub projects: std::vec::Vec<crate::model::ProjectListItem>,
}

impl ProjectListResponseSchema {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [limit][crate::model::ProjectListResponseSchema::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = v.into();
        self
    }

    /// Sets the value of [total_count][crate::model::ProjectListResponseSchema::total_count].
    pub fn set_total_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.total_count = v.into();
        self
    }

    /// Sets the value of [first][crate::model::ProjectListResponseSchema::first].
    pub fn set_first<T: std::convert::Into<crate::model::PaginationLink>>(mut self, v: T) -> Self {
        self.first = v.into();
        self
    }

    /// Sets the value of [last][crate::model::ProjectListResponseSchema::last].
    pub fn set_last<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::PaginationLink>,
    {
        self.last = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [last][crate::model::ProjectListResponseSchema::last].
    pub fn set_or_clear_last<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::PaginationLink>,
    {
        self.last = v.map(|x| x.into());
        self
    }

    /// Sets the value of [previous][crate::model::ProjectListResponseSchema::previous].
    pub fn set_previous<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::PaginationLink>,
    {
        self.previous = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [previous][crate::model::ProjectListResponseSchema::previous].
    pub fn set_or_clear_previous<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::PaginationLink>,
    {
        self.previous = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next][crate::model::ProjectListResponseSchema::next].
    pub fn set_next<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::PaginationLink>,
    {
        self.next = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next][crate::model::ProjectListResponseSchema::next].
    pub fn set_or_clear_next<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::PaginationLink>,
    {
        self.next = v.map(|x| x.into());
        self
    }

    /// Sets the value of [projects][crate::model::ProjectListResponseSchema::projects].
    pub fn set_projects<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ProjectListItem>,
    {
        use std::iter::Iterator;
        self.projects = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The metadata of a project.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ProjectMetadata {
    pub crn: std::option::Option<std::string::String>,

    /// The time the project was created.
    pub created_at: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub cumulative_needs_attention_view: std::vec::Vec<crate::model::CumulativeNeedsAttention>,

    pub cumulative_needs_attention_view_err: std::option::Option<std::string::String>,

    /// The location where the project was created.
    pub location: std::option::Option<std::string::String>,

    /// The resource group where the project was created.
    pub resource_group: std::option::Option<std::string::String>,

    /// The project state.
    pub state: std::option::Option<std::string::String>,

    pub event_notifications_crn: std::option::Option<std::string::String>,
}

impl ProjectMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::ProjectMetadata::crn].
    pub fn set_crn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.crn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [crn][crate::model::ProjectMetadata::crn].
    pub fn set_or_clear_crn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.crn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [created_at][crate::model::ProjectMetadata::created_at].
    pub fn set_created_at<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.created_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_at][crate::model::ProjectMetadata::created_at].
    pub fn set_or_clear_created_at<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.created_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [cumulative_needs_attention_view][crate::model::ProjectMetadata::cumulative_needs_attention_view].
    pub fn set_cumulative_needs_attention_view<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::CumulativeNeedsAttention>,
    {
        use std::iter::Iterator;
        self.cumulative_needs_attention_view = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [cumulative_needs_attention_view_err][crate::model::ProjectMetadata::cumulative_needs_attention_view_err].
    pub fn set_cumulative_needs_attention_view_err<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.cumulative_needs_attention_view_err = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cumulative_needs_attention_view_err][crate::model::ProjectMetadata::cumulative_needs_attention_view_err].
    pub fn set_or_clear_cumulative_needs_attention_view_err<T>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.cumulative_needs_attention_view_err = v.map(|x| x.into());
        self
    }

    /// Sets the value of [location][crate::model::ProjectMetadata::location].
    pub fn set_location<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [location][crate::model::ProjectMetadata::location].
    pub fn set_or_clear_location<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_group][crate::model::ProjectMetadata::resource_group].
    pub fn set_resource_group<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_group = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_group][crate::model::ProjectMetadata::resource_group].
    pub fn set_or_clear_resource_group<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_group = v.map(|x| x.into());
        self
    }

    /// Sets the value of [state][crate::model::ProjectMetadata::state].
    pub fn set_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [state][crate::model::ProjectMetadata::state].
    pub fn set_or_clear_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.state = v.map(|x| x.into());
        self
    }

    /// Sets the value of [event_notifications_crn][crate::model::ProjectMetadata::event_notifications_crn].
    pub fn set_event_notifications_crn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.event_notifications_crn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [event_notifications_crn][crate::model::ProjectMetadata::event_notifications_crn].
    pub fn set_or_clear_event_notifications_crn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.event_notifications_crn = v.map(|x| x.into());
        self
    }
}

/// The updatable fields of a project.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ProjectUpdate {
    pub name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,
}

impl ProjectUpdate {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::ProjectUpdate::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::ProjectUpdate::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::ProjectUpdate::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::ProjectUpdate::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }
}

/// A catalog event delivered by Pulsar.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PulsarEventItems {
    /// The event type.
    pub event_type: std::string::String,

    /// The time the event was published.
    pub timestamp: std::string::String,

    pub publisher: std::string::String,

    /// The account that published the event.
    pub account_id: std::string::String,

    /// The version of the event schema.
    pub version: std::string::String,

    /// The properties of the event.
    pub event_properties: std::option::Option<crate::model::JsonObject>,

    /// The unique ID of the event.
    pub event_id: std::option::Option<std::string::String>,

    /// Properties not described by the schema.
    #[serde(flatten)]
    pub additional_properties: crate::model::JsonObject,
}

impl PulsarEventItems {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [event_type][crate::model::PulsarEventItems::event_type].
    pub fn set_event_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.event_type = v.into();
        self
    }

    /// Sets the value of [timestamp][crate::model::PulsarEventItems::timestamp].
    pub fn set_timestamp<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.timestamp = v.into();
        self
    }

    /// Sets the value of [publisher][crate::model::PulsarEventItems::publisher].
    pub fn set_publisher<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.publisher = v.into();
        self
    }

    /// Sets the value of [account_id][crate::model::PulsarEventItems::account_id].
    pub fn set_account_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.account_id = v.into();
        self
    }

    /// Sets the value of [version][crate::model::PulsarEventItems::version].
    pub fn set_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [event_properties][crate::model::PulsarEventItems::event_properties].
    pub fn set_event_properties<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::JsonObject>,
    {
        self.event_properties = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [event_properties][crate::model::PulsarEventItems::event_properties].
    pub fn set_or_clear_event_properties<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::JsonObject>,
    {
        self.event_properties = v.map(|x| x.into());
        self
    }

    /// Sets the value of [event_id][crate::model::PulsarEventItems::event_id].
    pub fn set_event_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.event_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [event_id][crate::model::PulsarEventItems::event_id].
    pub fn set_or_clear_event_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.event_id = v.map(|x| x.into());
        self
    }
}

additional_properties!(PulsarEventItems);

/// The result of deprovisioning a service instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteResult {
    /// Properties not described by the schema.
    #[serde(flatten)]
    pub additional_properties: crate::model::JsonObject,
}

impl DeleteResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

additional_properties!(DeleteResult);

/// The cost estimate of a configuration.
///
/// The schema of the estimate is defined by the cost estimation service.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GetCostEstimateResponse {
    /// Properties not described by the schema.
    #[serde(flatten)]
    pub additional_properties: crate::model::JsonObject,
}

impl GetCostEstimateResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

additional_properties!(GetCostEstimateResponse);

/// The result of updating a service instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UpdateResult {
    /// Properties not described by the schema.
    #[serde(flatten)]
    pub additional_properties: crate::model::JsonObject,
}

impl UpdateResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

additional_properties!(UpdateResult);

/// The request message for [ProjectService::create_project][crate::client::ProjectService::create_project].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct CreateProjectRequest {
    /// The project name.
    pub name: std::string::String,

    /// The project description.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// The configurations included in the project.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub configs: std::vec::Vec<crate::model::ProjectConfigInput>,

    /// The resource group where the project is created.
    #[serde(skip)]
    pub resource_group: std::option::Option<std::string::String>,

    /// The location where the project is created.
    #[serde(skip)]
    pub location: std::option::Option<std::string::String>,
}

impl CreateProjectRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::CreateProjectRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [description][crate::model::CreateProjectRequest::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::CreateProjectRequest::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [configs][crate::model::CreateProjectRequest::configs].
    pub fn set_configs<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ProjectConfigInput>,
    {
        use std::iter::Iterator;
        self.configs = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [resource_group][crate::model::CreateProjectRequest::resource_group].
    pub fn set_resource_group<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_group = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_group][crate::model::CreateProjectRequest::resource_group].
    pub fn set_or_clear_resource_group<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_group = v.map(|x| x.into());
        self
    }

    /// Sets the value of [location][crate::model::CreateProjectRequest::location].
    pub fn set_location<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [location][crate::model::CreateProjectRequest::location].
    pub fn set_or_clear_location<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location = v.map(|x| x.into());
        self
    }
}

/// The request message for [ProjectService::list_projects][crate::client::ProjectService::list_projects].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListProjectsRequest {
    /// The cursor for the page of results to fetch.
    pub start: std::option::Option<std::string::String>,

    /// The maximum number of projects in the page.
    pub limit: std::option::Option<i64>,

    /// Include the complete schema of the resources in the response.
    pub complete: std::option::Option<bool>,
}

impl ListProjectsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [start][crate::model::ListProjectsRequest::start].
    pub fn set_start<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][crate::model::ListProjectsRequest::start].
    pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListProjectsRequest::limit].
    pub fn set_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListProjectsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [complete][crate::model::ListProjectsRequest::complete].
    pub fn set_complete<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.complete = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [complete][crate::model::ListProjectsRequest::complete].
    pub fn set_or_clear_complete<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.complete = v.map(|x| x.into());
        self
    }
}

/// The request message for [ProjectService::get_project][crate::client::ProjectService::get_project].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetProjectRequest {
    /// The unique ID of the project.
    pub id: std::string::String,

    /// Omit the configurations from the response.
    pub exclude_configs: std::option::Option<bool>,

    /// Include the complete schema of the resources in the response.
    pub complete: std::option::Option<bool>,
}

impl GetProjectRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::GetProjectRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [exclude_configs][crate::model::GetProjectRequest::exclude_configs].
    pub fn set_exclude_configs<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.exclude_configs = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [exclude_configs][crate::model::GetProjectRequest::exclude_configs].
    pub fn set_or_clear_exclude_configs<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.exclude_configs = v.map(|x| x.into());
        self
    }

    /// Sets the value of [complete][crate::model::GetProjectRequest::complete].
    pub fn set_complete<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.complete = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [complete][crate::model::GetProjectRequest::complete].
    pub fn set_or_clear_complete<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.complete = v.map(|x| x.into());
        self
    }
}

/// The request message for [ProjectService::update_project][crate::client::ProjectService::update_project].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateProjectRequest {
    /// The unique ID of the project.
    pub id: std::string::String,

    /// The patch to apply.
    pub json_patch_operation: std::vec::Vec<crate::model::JsonPatchOperation>,
}

impl UpdateProjectRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::UpdateProjectRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [json_patch_operation][crate::model::UpdateProjectRequest::json_patch_operation].
    ///
    /// This is a **required** field for requests.
    pub fn set_json_patch_operation<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::JsonPatchOperation>,
    {
        use std::iter::Iterator;
        self.json_patch_operation = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request message for [ProjectService::delete_project][crate::client::ProjectService::delete_project].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteProjectRequest {
    /// The unique ID of the project.
    pub id: std::string::String,

    /// Destroy the resources deployed by the project configurations.
    pub destroy: std::option::Option<bool>,
}

impl DeleteProjectRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::DeleteProjectRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [destroy][crate::model::DeleteProjectRequest::destroy].
    pub fn set_destroy<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.destroy = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [destroy][crate::model::DeleteProjectRequest::destroy].
    pub fn set_or_clear_destroy<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.destroy = v.map(|x| x.into());
        self
    }
}

/// The request message for [ProjectService::create_config][crate::client::ProjectService::create_config].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct CreateConfigRequest {
    /// The unique ID of the project.
    #[serde(skip)]
    pub id: std::string::String,

    /// The configuration name.
    #[serde(rename = "name")]
    pub new_name: std::string::String,

    /// The location ID of the configuration in the catalog.
    #[serde(rename = "locator_id")]
    pub new_locator_id: std::string::String,

    /// The ID of the new configuration.
    #[serde(rename = "id", skip_serializing_if = "std::option::Option::is_none")]
    pub new_id: std::option::Option<std::string::String>,

    /// The configuration labels.
    #[serde(rename = "labels", skip_serializing_if = "std::vec::Vec::is_empty")]
    pub new_labels: std::vec::Vec<std::string::String>,

    /// The configuration description.
    #[serde(rename = "description", skip_serializing_if = "std::option::Option::is_none")]
    pub new_description: std::option::Option<std::string::String>,

    /// The input variables of the configuration.
    #[serde(rename = "input", skip_serializing_if = "std::vec::Vec::is_empty")]
    pub new_input: std::vec::Vec<crate::model::InputVariableInput>,

    /// The settings of the configuration.
    #[serde(rename = "setting", skip_serializing_if = "std::vec::Vec::is_empty")]
    pub new_setting: std::vec::Vec<crate::model::ConfigSettingItems>,
}

impl CreateConfigRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::CreateConfigRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [new_name][crate::model::CreateConfigRequest::new_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_new_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.new_name = v.into();
        self
    }

    /// Sets the value of [new_locator_id][crate::model::CreateConfigRequest::new_locator_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_new_locator_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.new_locator_id = v.into();
        self
    }

    /// Sets the value of [new_id][crate::model::CreateConfigRequest::new_id].
    pub fn set_new_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.new_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [new_id][crate::model::CreateConfigRequest::new_id].
    pub fn set_or_clear_new_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.new_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [new_labels][crate::model::CreateConfigRequest::new_labels].
    pub fn set_new_labels<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.new_labels = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [new_description][crate::model::CreateConfigRequest::new_description].
    pub fn set_new_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.new_description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [new_description][crate::model::CreateConfigRequest::new_description].
    pub fn set_or_clear_new_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.new_description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [new_input][crate::model::CreateConfigRequest::new_input].
    pub fn set_new_input<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::InputVariableInput>,
    {
        use std::iter::Iterator;
        self.new_input = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [new_setting][crate::model::CreateConfigRequest::new_setting].
    pub fn set_new_setting<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ConfigSettingItems>,
    {
        use std::iter::Iterator;
        self.new_setting = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request message for [ProjectService::list_configs][crate::client::ProjectService::list_configs].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListConfigsRequest {
    /// The unique ID of the project.
    pub id: std::string::String,

    /// The version of the configuration, see [config_version].
    pub version: std::option::Option<std::string::String>,

    /// Include the complete schema of the resources in the response.
    pub complete: std::option::Option<bool>,
}

impl ListConfigsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::ListConfigsRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [version][crate::model::ListConfigsRequest::version].
    pub fn set_version<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.version = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [version][crate::model::ListConfigsRequest::version].
    pub fn set_or_clear_version<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.version = v.map(|x| x.into());
        self
    }

    /// Sets the value of [complete][crate::model::ListConfigsRequest::complete].
    pub fn set_complete<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.complete = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [complete][crate::model::ListConfigsRequest::complete].
    pub fn set_or_clear_complete<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.complete = v.map(|x| x.into());
        self
    }
}

/// The request message for [ProjectService::get_config][crate::client::ProjectService::get_config].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetConfigRequest {
    /// The unique ID of the project.
    pub id: std::string::String,

    /// The unique ID of the configuration.
    pub config_id: std::string::String,

    /// The version of the configuration, see [config_version].
    pub version: std::option::Option<std::string::String>,

    /// Include the complete schema of the resources in the response.
    pub complete: std::option::Option<bool>,
}

impl GetConfigRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::GetConfigRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [config_id][crate::model::GetConfigRequest::config_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_config_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }

    /// Sets the value of [version][crate::model::GetConfigRequest::version].
    pub fn set_version<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.version = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [version][crate::model::GetConfigRequest::version].
    pub fn set_or_clear_version<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.version = v.map(|x| x.into());
        self
    }

    /// Sets the value of [complete][crate::model::GetConfigRequest::complete].
    pub fn set_complete<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.complete = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [complete][crate::model::GetConfigRequest::complete].
    pub fn set_or_clear_complete<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.complete = v.map(|x| x.into());
        self
    }
}

/// The request message for [ProjectService::update_config][crate::client::ProjectService::update_config].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateConfigRequest {
    /// The unique ID of the project.
    pub id: std::string::String,

    /// The unique ID of the configuration.
    pub config_id: std::string::String,

    /// The patch to apply.
    pub project_config: std::vec::Vec<crate::model::JsonPatchOperation>,

    /// Include the complete schema of the resources in the response.
    pub complete: std::option::Option<bool>,
}

impl UpdateConfigRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::UpdateConfigRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [config_id][crate::model::UpdateConfigRequest::config_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_config_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }

    /// Sets the value of [project_config][crate::model::UpdateConfigRequest::project_config].
    ///
    /// This is a **required** field for requests.
    pub fn set_project_config<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::JsonPatchOperation>,
    {
        use std::iter::Iterator;
        self.project_config = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [complete][crate::model::UpdateConfigRequest::complete].
    pub fn set_complete<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.complete = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [complete][crate::model::UpdateConfigRequest::complete].
    pub fn set_or_clear_complete<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.complete = v.map(|x| x.into());
        self
    }
}

/// The request message for [ProjectService::delete_config][crate::client::ProjectService::delete_config].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteConfigRequest {
    /// The unique ID of the project.
    pub id: std::string::String,

    /// The unique ID of the configuration.
    pub config_id: std::string::String,

    /// Only delete the draft version of the configuration.
    pub draft_only: std::option::Option<bool>,

    /// Destroy the resources deployed by the configuration.
    pub destroy: std::option::Option<bool>,
}

impl DeleteConfigRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::DeleteConfigRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [config_id][crate::model::DeleteConfigRequest::config_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_config_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }

    /// Sets the value of [draft_only][crate::model::DeleteConfigRequest::draft_only].
    pub fn set_draft_only<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.draft_only = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [draft_only][crate::model::DeleteConfigRequest::draft_only].
    pub fn set_or_clear_draft_only<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.draft_only = v.map(|x| x.into());
        self
    }

    /// Sets the value of [destroy][crate::model::DeleteConfigRequest::destroy].
    pub fn set_destroy<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.destroy = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [destroy][crate::model::DeleteConfigRequest::destroy].
    pub fn set_or_clear_destroy<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.destroy = v.map(|x| x.into());
        self
    }
}

/// The request message for [ProjectService::get_config_diff][crate::client::ProjectService::get_config_diff].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetConfigDiffRequest {
    /// The unique ID of the project.
    pub id: std::string::String,

    /// The unique ID of the configuration.
    pub config_id: std::string::String,
}

impl GetConfigDiffRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::GetConfigDiffRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [config_id][crate::model::GetConfigDiffRequest::config_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_config_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }
}

/// The request message for [ProjectService::force_merge][crate::client::ProjectService::force_merge].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct ForceMergeRequest {
    /// The unique ID of the project.
    #[serde(skip)]
    pub id: std::string::String,

    /// The unique ID of the configuration.
    #[serde(skip)]
    pub config_id: std::string::String,

    /// A note explaining why the merge was forced.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub comment: std::option::Option<std::string::String>,

    /// Include the complete schema of the resources in the response.
    #[serde(skip)]
    pub complete: std::option::Option<bool>,
}

impl ForceMergeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::ForceMergeRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [config_id][crate::model::ForceMergeRequest::config_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_config_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }

    /// Sets the value of [comment][crate::model::ForceMergeRequest::comment].
    pub fn set_comment<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.comment = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [comment][crate::model::ForceMergeRequest::comment].
    pub fn set_or_clear_comment<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.comment = v.map(|x| x.into());
        self
    }

    /// Sets the value of [complete][crate::model::ForceMergeRequest::complete].
    pub fn set_complete<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.complete = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [complete][crate::model::ForceMergeRequest::complete].
    pub fn set_or_clear_complete<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.complete = v.map(|x| x.into());
        self
    }
}

/// The request message for [ProjectService::create_draft_action][crate::client::ProjectService::create_draft_action].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct CreateDraftActionRequest {
    /// The unique ID of the project.
    #[serde(skip)]
    pub id: std::string::String,

    /// The unique ID of the configuration.
    #[serde(skip)]
    pub config_id: std::string::String,

    /// The action to apply to the draft, see [draft_action].
    #[serde(skip)]
    pub action: std::string::String,

    /// A note describing the action.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub comment: std::option::Option<std::string::String>,

    /// Include the complete schema of the resources in the response.
    #[serde(skip)]
    pub complete: std::option::Option<bool>,
}

impl CreateDraftActionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::CreateDraftActionRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [config_id][crate::model::CreateDraftActionRequest::config_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_config_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }

    /// Sets the value of [action][crate::model::CreateDraftActionRequest::action].
    ///
    /// This is a **required** field for requests.
    pub fn set_action<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.action = v.into();
        self
    }

    /// Sets the value of [comment][crate::model::CreateDraftActionRequest::comment].
    pub fn set_comment<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.comment = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [comment][crate::model::CreateDraftActionRequest::comment].
    pub fn set_or_clear_comment<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.comment = v.map(|x| x.into());
        self
    }

    /// Sets the value of [complete][crate::model::CreateDraftActionRequest::complete].
    pub fn set_complete<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.complete = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [complete][crate::model::CreateDraftActionRequest::complete].
    pub fn set_or_clear_complete<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.complete = v.map(|x| x.into());
        self
    }
}

/// The request message for [ProjectService::check_config][crate::client::ProjectService::check_config].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CheckConfigRequest {
    /// The unique ID of the project.
    pub id: std::string::String,

    /// The unique ID of the configuration.
    pub config_id: std::string::String,

    /// The IAM refresh token used to validate the configuration.
    pub x_auth_refresh_token: std::option::Option<std::string::String>,

    /// The version of the configuration, see [config_version].
    pub version: std::option::Option<std::string::String>,

    /// Include the complete schema of the resources in the response.
    pub complete: std::option::Option<bool>,
}

impl CheckConfigRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::CheckConfigRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [config_id][crate::model::CheckConfigRequest::config_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_config_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }

    /// Sets the value of [x_auth_refresh_token][crate::model::CheckConfigRequest::x_auth_refresh_token].
    pub fn set_x_auth_refresh_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_auth_refresh_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_auth_refresh_token][crate::model::CheckConfigRequest::x_auth_refresh_token].
    pub fn set_or_clear_x_auth_refresh_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_auth_refresh_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [version][crate::model::CheckConfigRequest::version].
    pub fn set_version<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.version = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [version][crate::model::CheckConfigRequest::version].
    pub fn set_or_clear_version<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.version = v.map(|x| x.into());
        self
    }

    /// Sets the value of [complete][crate::model::CheckConfigRequest::complete].
    pub fn set_complete<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.complete = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [complete][crate::model::CheckConfigRequest::complete].
    pub fn set_or_clear_complete<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.complete = v.map(|x| x.into());
        self
    }
}

/// The request message for [ProjectService::install_config][crate::client::ProjectService::install_config].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct InstallConfigRequest {
    /// The unique ID of the project.
    pub id: std::string::String,

    /// The unique ID of the configuration.
    pub config_id: std::string::String,

    /// Include the complete schema of the resources in the response.
    pub complete: std::option::Option<bool>,
}

impl InstallConfigRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::InstallConfigRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [config_id][crate::model::InstallConfigRequest::config_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_config_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }

    /// Sets the value of [complete][crate::model::InstallConfigRequest::complete].
    pub fn set_complete<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.complete = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [complete][crate::model::InstallConfigRequest::complete].
    pub fn set_or_clear_complete<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.complete = v.map(|x| x.into());
        self
    }
}

/// The request message for [ProjectService::uninstall_config][crate::client::ProjectService::uninstall_config].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UninstallConfigRequest {
    /// The unique ID of the project.
    pub id: std::string::String,

    /// The unique ID of the configuration.
    pub config_id: std::string::String,
}

impl UninstallConfigRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::UninstallConfigRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [config_id][crate::model::UninstallConfigRequest::config_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_config_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }
}

/// The request message for [ProjectService::get_schematics_job][crate::client::ProjectService::get_schematics_job].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetSchematicsJobRequest {
    /// The unique ID of the project.
    pub id: std::string::String,

    /// The unique ID of the configuration.
    pub config_id: std::string::String,

    /// The triggered action, see [job_action].
    pub action: std::string::String,

    /// Only return jobs started after this time, in seconds since the Unix epoch.
    pub since: std::option::Option<i64>,
}

impl GetSchematicsJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::GetSchematicsJobRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [config_id][crate::model::GetSchematicsJobRequest::config_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_config_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }

    /// Sets the value of [action][crate::model::GetSchematicsJobRequest::action].
    ///
    /// This is a **required** field for requests.
    pub fn set_action<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.action = v.into();
        self
    }

    /// Sets the value of [since][crate::model::GetSchematicsJobRequest::since].
    pub fn set_since<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.since = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [since][crate::model::GetSchematicsJobRequest::since].
    pub fn set_or_clear_since<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.since = v.map(|x| x.into());
        self
    }
}

/// The request message for [ProjectService::get_cost_estimate][crate::client::ProjectService::get_cost_estimate].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetCostEstimateRequest {
    /// The unique ID of the project.
    pub id: std::string::String,

    /// The unique ID of the configuration.
    pub config_id: std::string::String,

    /// The version of the configuration, see [config_version].
    pub version: std::option::Option<std::string::String>,
}

impl GetCostEstimateRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::GetCostEstimateRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [config_id][crate::model::GetCostEstimateRequest::config_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_config_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }

    /// Sets the value of [version][crate::model::GetCostEstimateRequest::version].
    pub fn set_version<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.version = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [version][crate::model::GetCostEstimateRequest::version].
    pub fn set_or_clear_version<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.version = v.map(|x| x.into());
        self
    }
}

/// The request message for [ProjectService::post_notification][crate::client::ProjectService::post_notification].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct PostNotificationRequest {
    /// The unique ID of the project.
    #[serde(skip)]
    pub id: std::string::String,

    /// The notifications to post.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub notifications: std::vec::Vec<crate::model::NotificationEvent>,
}

impl PostNotificationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::PostNotificationRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [notifications][crate::model::PostNotificationRequest::notifications].
    pub fn set_notifications<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::NotificationEvent>,
    {
        use std::iter::Iterator;
        self.notifications = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request message for [ProjectService::get_notifications][crate::client::ProjectService::get_notifications].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetNotificationsRequest {
    /// The unique ID of the project.
    pub id: std::string::String,
}

impl GetNotificationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::GetNotificationsRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The request message for [ProjectService::delete_notification][crate::client::ProjectService::delete_notification].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteNotificationRequest {
    /// The unique ID of the project.
    pub id: std::string::String,
}

impl DeleteNotificationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::DeleteNotificationRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The request message for [ProjectService::receive_pulsar_catalog_events][crate::client::ProjectService::receive_pulsar_catalog_events].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ReceivePulsarCatalogEventsRequest {
    /// The events to deliver.
    pub pulsar_catalog_events: std::vec::Vec<crate::model::PulsarEventItems>,
}

impl ReceivePulsarCatalogEventsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [pulsar_catalog_events][crate::model::ReceivePulsarCatalogEventsRequest::pulsar_catalog_events].
    ///
    /// This is a **required** field for requests.
    pub fn set_pulsar_catalog_events<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::PulsarEventItems>,
    {
        use std::iter::Iterator;
        self.pulsar_catalog_events = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request message for [ProjectService::get_health][crate::client::ProjectService::get_health].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetHealthRequest {
    /// Include the health of the service dependencies.
    pub info: std::option::Option<bool>,
}

impl GetHealthRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [info][crate::model::GetHealthRequest::info].
    pub fn set_info<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.info = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [info][crate::model::GetHealthRequest::info].
    pub fn set_or_clear_info<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.info = v.map(|x| x.into());
        self
    }
}

/// The request message for [ProjectService::replace_service_instance][crate::client::ProjectService::replace_service_instance].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct ReplaceServiceInstanceRequest {
    /// The ID of the service instance.
    #[serde(skip)]
    pub instance_id: std::string::String,

    /// The ID of the catalog service.
    pub service_id: std::string::String,

    /// The ID of the catalog plan.
    pub plan_id: std::string::String,

    /// Platform specific context for the service instance.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub context: std::vec::Vec<std::string::String>,

    /// Configuration parameters for the service instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parameters: std::option::Option<crate::model::JsonObject>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub previous_values: std::vec::Vec<std::string::String>,

    /// The broker API version.
    #[serde(skip)]
    pub x_broker_api_version: std::option::Option<std::string::String>,

    /// The identity of the user that initiated the request.
    #[serde(skip)]
    pub x_broker_api_originating_identity: std::option::Option<std::string::String>,

    /// Whether the client supports asynchronous operations.
    #[serde(skip)]
    pub accepts_incomplete: std::option::Option<bool>,
}

impl ReplaceServiceInstanceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [instance_id][crate::model::ReplaceServiceInstanceRequest::instance_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instance_id = v.into();
        self
    }

    /// Sets the value of [service_id][crate::model::ReplaceServiceInstanceRequest::service_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_service_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.service_id = v.into();
        self
    }

    /// Sets the value of [plan_id][crate::model::ReplaceServiceInstanceRequest::plan_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_plan_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.plan_id = v.into();
        self
    }

    /// Sets the value of [context][crate::model::ReplaceServiceInstanceRequest::context].
    pub fn set_context<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.context = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [parameters][crate::model::ReplaceServiceInstanceRequest::parameters].
    pub fn set_parameters<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::JsonObject>,
    {
        self.parameters = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [parameters][crate::model::ReplaceServiceInstanceRequest::parameters].
    pub fn set_or_clear_parameters<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::JsonObject>,
    {
        self.parameters = v.map(|x| x.into());
        self
    }

    /// Sets the value of [previous_values][crate::model::ReplaceServiceInstanceRequest::previous_values].
    pub fn set_previous_values<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.previous_values = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [x_broker_api_version][crate::model::ReplaceServiceInstanceRequest::x_broker_api_version].
    pub fn set_x_broker_api_version<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_broker_api_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_broker_api_version][crate::model::ReplaceServiceInstanceRequest::x_broker_api_version].
    pub fn set_or_clear_x_broker_api_version<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_broker_api_version = v.map(|x| x.into());
        self
    }

    /// Sets the value of [x_broker_api_originating_identity][crate::model::ReplaceServiceInstanceRequest::x_broker_api_originating_identity].
    pub fn set_x_broker_api_originating_identity<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_broker_api_originating_identity = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_broker_api_originating_identity][crate::model::ReplaceServiceInstanceRequest::x_broker_api_originating_identity].
    pub fn set_or_clear_x_broker_api_originating_identity<T>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_broker_api_originating_identity = v.map(|x| x.into());
        self
    }

    /// Sets the value of [accepts_incomplete][crate::model::ReplaceServiceInstanceRequest::accepts_incomplete].
    pub fn set_accepts_incomplete<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.accepts_incomplete = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [accepts_incomplete][crate::model::ReplaceServiceInstanceRequest::accepts_incomplete].
    pub fn set_or_clear_accepts_incomplete<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.accepts_incomplete = v.map(|x| x.into());
        self
    }
}

/// The request message for [ProjectService::delete_service_instance][crate::client::ProjectService::delete_service_instance].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteServiceInstanceRequest {
    /// The ID of the service instance.
    pub instance_id: std::string::String,

    /// The ID of the catalog plan.
    pub plan_id: std::string::String,

    /// The ID of the catalog service.
    pub service_id: std::string::String,

    /// The broker API version.
    pub x_broker_api_version: std::option::Option<std::string::String>,

    /// The identity of the user that initiated the request.
    pub x_broker_api_originating_identity: std::option::Option<std::string::String>,

    /// Whether the client supports asynchronous operations.
    pub accepts_incomplete: std::option::Option<bool>,
}

impl DeleteServiceInstanceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [instance_id][crate::model::DeleteServiceInstanceRequest::instance_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instance_id = v.into();
        self
    }

    /// Sets the value of [plan_id][crate::model::DeleteServiceInstanceRequest::plan_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_plan_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.plan_id = v.into();
        self
    }

    /// Sets the value of [service_id][crate::model::DeleteServiceInstanceRequest::service_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_service_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.service_id = v.into();
        self
    }

    /// Sets the value of [x_broker_api_version][crate::model::DeleteServiceInstanceRequest::x_broker_api_version].
    pub fn set_x_broker_api_version<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_broker_api_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_broker_api_version][crate::model::DeleteServiceInstanceRequest::x_broker_api_version].
    pub fn set_or_clear_x_broker_api_version<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_broker_api_version = v.map(|x| x.into());
        self
    }

    /// Sets the value of [x_broker_api_originating_identity][crate::model::DeleteServiceInstanceRequest::x_broker_api_originating_identity].
    pub fn set_x_broker_api_originating_identity<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_broker_api_originating_identity = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_broker_api_originating_identity][crate::model::DeleteServiceInstanceRequest::x_broker_api_originating_identity].
    pub fn set_or_clear_x_broker_api_originating_identity<T>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_broker_api_originating_identity = v.map(|x| x.into());
        self
    }

    /// Sets the value of [accepts_incomplete][crate::model::DeleteServiceInstanceRequest::accepts_incomplete].
    pub fn set_accepts_incomplete<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.accepts_incomplete = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [accepts_incomplete][crate::model::DeleteServiceInstanceRequest::accepts_incomplete].
    pub fn set_or_clear_accepts_incomplete<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.accepts_incomplete = v.map(|x| x.into());
        self
    }
}

/// The request message for [ProjectService::update_service_instance][crate::client::ProjectService::update_service_instance].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateServiceInstanceRequest {
    /// The ID of the service instance.
    pub instance_id: std::string::String,

    /// The patch to apply.
    pub json_patch_operation: std::vec::Vec<crate::model::JsonPatchOperation>,

    /// The broker API version.
    pub x_broker_api_version: std::option::Option<std::string::String>,

    /// The identity of the user that initiated the request.
    pub x_broker_api_originating_identity: std::option::Option<std::string::String>,

    /// Whether the client supports asynchronous operations.
    pub accepts_incomplete: std::option::Option<bool>,
}

impl UpdateServiceInstanceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [instance_id][crate::model::UpdateServiceInstanceRequest::instance_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instance_id = v.into();
        self
    }

    /// Sets the value of [json_patch_operation][crate::model::UpdateServiceInstanceRequest::json_patch_operation].
    ///
    /// This is a **required** field for requests.
    pub fn set_json_patch_operation<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::JsonPatchOperation>,
    {
        use std::iter::Iterator;
        self.json_patch_operation = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [x_broker_api_version][crate::model::UpdateServiceInstanceRequest::x_broker_api_version].
    pub fn set_x_broker_api_version<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_broker_api_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_broker_api_version][crate::model::UpdateServiceInstanceRequest::x_broker_api_version].
    pub fn set_or_clear_x_broker_api_version<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_broker_api_version = v.map(|x| x.into());
        self
    }

    /// Sets the value of [x_broker_api_originating_identity][crate::model::UpdateServiceInstanceRequest::x_broker_api_originating_identity].
    pub fn set_x_broker_api_originating_identity<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_broker_api_originating_identity = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_broker_api_originating_identity][crate::model::UpdateServiceInstanceRequest::x_broker_api_originating_identity].
    pub fn set_or_clear_x_broker_api_originating_identity<T>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_broker_api_originating_identity = v.map(|x| x.into());
        self
    }

    /// Sets the value of [accepts_incomplete][crate::model::UpdateServiceInstanceRequest::accepts_incomplete].
    pub fn set_accepts_incomplete<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.accepts_incomplete = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [accepts_incomplete][crate::model::UpdateServiceInstanceRequest::accepts_incomplete].
    pub fn set_or_clear_accepts_incomplete<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.accepts_incomplete = v.map(|x| x.into());
        self
    }
}

/// The request message for [ProjectService::get_last_operation][crate::client::ProjectService::get_last_operation].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLastOperationRequest {
    /// The ID of the service instance.
    pub instance_id: std::string::String,

    /// The broker API version.
    pub x_broker_api_version: std::option::Option<std::string::String>,

    /// The operation identifier returned by the broker.
    pub operation: std::option::Option<std::string::String>,

    pub plan_id: std::option::Option<std::string::String>,

    pub service_id: std::option::Option<std::string::String>,
}

impl GetLastOperationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [instance_id][crate::model::GetLastOperationRequest::instance_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instance_id = v.into();
        self
    }

    /// Sets the value of [x_broker_api_version][crate::model::GetLastOperationRequest::x_broker_api_version].
    pub fn set_x_broker_api_version<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_broker_api_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_broker_api_version][crate::model::GetLastOperationRequest::x_broker_api_version].
    pub fn set_or_clear_x_broker_api_version<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_broker_api_version = v.map(|x| x.into());
        self
    }

    /// Sets the value of [operation][crate::model::GetLastOperationRequest::operation].
    pub fn set_operation<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.operation = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [operation][crate::model::GetLastOperationRequest::operation].
    pub fn set_or_clear_operation<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.operation = v.map(|x| x.into());
        self
    }

    /// Sets the value of [plan_id][crate::model::GetLastOperationRequest::plan_id].
    pub fn set_plan_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.plan_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [plan_id][crate::model::GetLastOperationRequest::plan_id].
    pub fn set_or_clear_plan_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.plan_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [service_id][crate::model::GetLastOperationRequest::service_id].
    pub fn set_service_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.service_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [service_id][crate::model::GetLastOperationRequest::service_id].
    pub fn set_or_clear_service_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.service_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [ProjectService::replace_service_instance_state][crate::client::ProjectService::replace_service_instance_state].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct ReplaceServiceInstanceStateRequest {
    /// The ID of the service instance.
    #[serde(skip)]
    pub instance_id: std::string::String,

    /// Whether the service instance is enabled.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enabled: std::option::Option<bool>,

    /// The ID of the user that initiated the change.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub initiator_id: std::option::Option<std::string::String>,

    /// The reason for the change.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub reason_code: std::option::Option<crate::model::JsonObject>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub plan_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub previous_values: std::vec::Vec<std::string::String>,

    /// The broker API version.
    #[serde(skip)]
    pub x_broker_api_version: std::option::Option<std::string::String>,
}

impl ReplaceServiceInstanceStateRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [instance_id][crate::model::ReplaceServiceInstanceStateRequest::instance_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instance_id = v.into();
        self
    }

    /// Sets the value of [enabled][crate::model::ReplaceServiceInstanceStateRequest::enabled].
    ///
    /// This is a **required** field for requests.
    pub fn set_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enabled][crate::model::ReplaceServiceInstanceStateRequest::enabled].
    pub fn set_or_clear_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [initiator_id][crate::model::ReplaceServiceInstanceStateRequest::initiator_id].
    pub fn set_initiator_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.initiator_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [initiator_id][crate::model::ReplaceServiceInstanceStateRequest::initiator_id].
    pub fn set_or_clear_initiator_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.initiator_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [reason_code][crate::model::ReplaceServiceInstanceStateRequest::reason_code].
    pub fn set_reason_code<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::JsonObject>,
    {
        self.reason_code = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [reason_code][crate::model::ReplaceServiceInstanceStateRequest::reason_code].
    pub fn set_or_clear_reason_code<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::JsonObject>,
    {
        self.reason_code = v.map(|x| x.into());
        self
    }

    /// Sets the value of [plan_id][crate::model::ReplaceServiceInstanceStateRequest::plan_id].
    pub fn set_plan_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.plan_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [plan_id][crate::model::ReplaceServiceInstanceStateRequest::plan_id].
    pub fn set_or_clear_plan_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.plan_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [previous_values][crate::model::ReplaceServiceInstanceStateRequest::previous_values].
    pub fn set_previous_values<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.previous_values = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [x_broker_api_version][crate::model::ReplaceServiceInstanceStateRequest::x_broker_api_version].
    pub fn set_x_broker_api_version<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_broker_api_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_broker_api_version][crate::model::ReplaceServiceInstanceStateRequest::x_broker_api_version].
    pub fn set_or_clear_x_broker_api_version<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_broker_api_version = v.map(|x| x.into());
        self
    }
}

/// The request message for [ProjectService::get_service_instance][crate::client::ProjectService::get_service_instance].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetServiceInstanceRequest {
    /// The ID of the service instance.
    pub instance_id: std::string::String,

    /// The broker API version.
    pub x_broker_api_version: std::option::Option<std::string::String>,
}

impl GetServiceInstanceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [instance_id][crate::model::GetServiceInstanceRequest::instance_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instance_id = v.into();
        self
    }

    /// Sets the value of [x_broker_api_version][crate::model::GetServiceInstanceRequest::x_broker_api_version].
    pub fn set_x_broker_api_version<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_broker_api_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_broker_api_version][crate::model::GetServiceInstanceRequest::x_broker_api_version].
    pub fn set_or_clear_x_broker_api_version<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_broker_api_version = v.map(|x| x.into());
        self
    }
}

/// The request message for [ProjectService::get_catalog][crate::client::ProjectService::get_catalog].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetCatalogRequest {
    /// The broker API version.
    pub x_broker_api_version: std::option::Option<std::string::String>,
}

impl GetCatalogRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [x_broker_api_version][crate::model::GetCatalogRequest::x_broker_api_version].
    pub fn set_x_broker_api_version<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_broker_api_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_broker_api_version][crate::model::GetCatalogRequest::x_broker_api_version].
    pub fn set_or_clear_x_broker_api_version<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_broker_api_version = v.map(|x| x.into());
        self
    }
}

/// The request message for [ProjectService::post_event_notifications_integration][crate::client::ProjectService::post_event_notifications_integration].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct PostEventNotificationsIntegrationRequest {
    /// The unique ID of the project.
    #[serde(skip)]
    pub id: std::string::String,

    /// The CRN of the Event Notifications instance.
    pub instance_crn: std::string::String,

    /// The description of the source.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// The name of the source.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_notifications_source_name: std::option::Option<std::string::String>,

    /// Whether the source is enabled.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enabled: std::option::Option<bool>,
}

impl PostEventNotificationsIntegrationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::PostEventNotificationsIntegrationRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [instance_crn][crate::model::PostEventNotificationsIntegrationRequest::instance_crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_instance_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instance_crn = v.into();
        self
    }

    /// Sets the value of [description][crate::model::PostEventNotificationsIntegrationRequest::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::PostEventNotificationsIntegrationRequest::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [event_notifications_source_name][crate::model::PostEventNotificationsIntegrationRequest::event_notifications_source_name].
    pub fn set_event_notifications_source_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.event_notifications_source_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [event_notifications_source_name][crate::model::PostEventNotificationsIntegrationRequest::event_notifications_source_name].
    pub fn set_or_clear_event_notifications_source_name<T>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.event_notifications_source_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enabled][crate::model::PostEventNotificationsIntegrationRequest::enabled].
    pub fn set_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enabled][crate::model::PostEventNotificationsIntegrationRequest::enabled].
    pub fn set_or_clear_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = v.map(|x| x.into());
        self
    }
}

/// The request message for [ProjectService::get_event_notifications_integration][crate::client::ProjectService::get_event_notifications_integration].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetEventNotificationsIntegrationRequest {
    /// The unique ID of the project.
    pub id: std::string::String,
}

impl GetEventNotificationsIntegrationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::GetEventNotificationsIntegrationRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The request message for [ProjectService::delete_event_notifications_integration][crate::client::ProjectService::delete_event_notifications_integration].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteEventNotificationsIntegrationRequest {
    /// The unique ID of the project.
    pub id: std::string::String,
}

impl DeleteEventNotificationsIntegrationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::DeleteEventNotificationsIntegrationRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The request message for [ProjectService::post_test_event_notification][crate::client::ProjectService::post_test_event_notification].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct PostTestEventNotificationRequest {
    /// The unique ID of the project.
    #[serde(skip)]
    pub id: std::string::String,

    /// The long description of the test event.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ibmendefaultlong: std::option::Option<std::string::String>,

    /// The short description of the test event.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ibmendefaultshort: std::option::Option<std::string::String>,
}

impl PostTestEventNotificationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::PostTestEventNotificationRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [ibmendefaultlong][crate::model::PostTestEventNotificationRequest::ibmendefaultlong].
    pub fn set_ibmendefaultlong<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ibmendefaultlong = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ibmendefaultlong][crate::model::PostTestEventNotificationRequest::ibmendefaultlong].
    pub fn set_or_clear_ibmendefaultlong<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ibmendefaultlong = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ibmendefaultshort][crate::model::PostTestEventNotificationRequest::ibmendefaultshort].
    pub fn set_ibmendefaultshort<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ibmendefaultshort = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ibmendefaultshort][crate::model::PostTestEventNotificationRequest::ibmendefaultshort].
    pub fn set_or_clear_ibmendefaultshort<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ibmendefaultshort = v.map(|x| x.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    #[test]
    fn project_config_template() -> TestResult {
        let input = json!({
            "id": "cfg-1",
            "name": "vpc",
            "locator_id": "1082e7d2.5e2f0d4f-version",
            "type": "terraform_template",
            "input": [{"name": "region", "type": "string", "required": true}],
            "state": "draft",
            "version": 3
        });
        let got = serde_json::from_value::<ProjectConfig>(input)?;
        let want = ProjectConfig::new()
            .set_id("cfg-1")
            .set_name("vpc")
            .set_locator_id("1082e7d2.5e2f0d4f-version")
            .set_definition(ConfigDefinition::TerraformTemplate(
                TemplateDefinition::new().set_input([InputVariable::new()
                    .set_name("region")
                    .set_type(input_variable_type::STRING)
                    .set_required(true)]),
            ));
        assert_eq!(got, want);
        let definition = got.definition.as_ref();
        assert_eq!(
            definition.map(ConfigDefinition::config_type),
            Some("terraform_template")
        );
        assert_eq!(definition.map(|d| d.input().len()), Some(1));

        let json = serde_json::to_value(&got)?;
        assert_eq!(json.get("type"), Some(&json!("terraform_template")));
        assert_eq!(json.get("input").map(|v| v[0]["name"].clone()), Some(json!("region")));
        Ok(())
    }

    #[test_case(json!({"name": "a", "type": "manual"}), Some(ConfigDefinition::Manual); "manual")]
    #[test_case(json!({"name": "a", "type": "schematics_blueprint"}), Some(ConfigDefinition::SchematicsBlueprint(TemplateDefinition::new())); "blueprint")]
    #[test_case(json!({"name": "a", "type": "stack"}), None; "unknown type")]
    #[test_case(json!({"name": "a"}), None; "missing type")]
    fn project_config_definition(input: serde_json::Value, want: Option<ConfigDefinition>) -> TestResult {
        let got = serde_json::from_value::<ProjectConfig>(input)?;
        assert_eq!(got.name, "a");
        assert_eq!(got.definition, want);
        Ok(())
    }

    #[test_case(json!({"name": "a", "locator_id": "l", "type": "terraform_template", "input": "not-an-array"}); "template input")]
    #[test_case(json!({"name": "a", "type": "schematics_blueprint", "input": [{"name": 7}]}); "blueprint input")]
    #[test_case(json!({"name": "a", "type": "manual", "output": {}}); "manual output")]
    fn project_config_malformed(input: serde_json::Value) {
        let got = serde_json::from_value::<ProjectConfig>(input);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn project_config_unknown_type_keeps_fields() -> TestResult {
        let input = json!({"name": "a", "type": "stack", "input": "ignored", "labels": ["x"]});
        let got = serde_json::from_value::<ProjectConfig>(input)?;
        assert_eq!(got.definition, None);
        assert_eq!(got.labels, vec!["x".to_string()]);
        Ok(())
    }

    #[test]
    fn project_config_to_patch() -> TestResult {
        let config = ProjectConfig::new()
            .set_name("updated")
            .set_labels(["env:prod"])
            .set_description("")
            .set_definition(ConfigDefinition::SchematicsBlueprint(
                TemplateDefinition::new().set_input([InputVariable::new()
                    .set_name("count")
                    .set_type(input_variable_type::INT)]),
            ));
        let got = config
            .to_patch()?
            .into_iter()
            .map(serde_json::to_value)
            .collect::<serde_json::Result<Vec<_>>>()?;
        let want = vec![
            json!({"op": "add", "path": "/name", "value": "updated"}),
            json!({"op": "add", "path": "/labels", "value": ["env:prod"]}),
            json!({"op": "add", "path": "/type", "value": "schematics_blueprint"}),
            json!({"op": "add", "path": "/input", "value": [{"name": "count", "type": "int"}]}),
        ];
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn project_update_to_patch() {
        let got = ProjectUpdate::new().set_description("new description").to_patch();
        let want = vec![
            JsonPatchOperation::new()
                .set_op(json_patch_op::ADD)
                .set_path("/description")
                .set_value("new description"),
        ];
        assert_eq!(got, want);
        assert!(ProjectUpdate::new().to_patch().is_empty());
    }

    #[test]
    fn update_result_to_patch() {
        let result = UpdateResult::new()
            .set_property("zone", "us-south-1")
            .set_property("count", 2);
        let got = result.to_patch();
        let paths = got.iter().map(|op| op.path.as_str()).collect::<Vec<_>>();
        assert_eq!(paths, vec!["/count", "/zone"]);
        assert_eq!(got[0].value, Some(json!(2)));
        assert_eq!(got[1].value, Some(json!("us-south-1")));
    }

    #[test]
    fn additional_properties() -> TestResult {
        let input = json!({"dashboard": "https://example.com", "retries": 3});
        let got = serde_json::from_value::<DeleteResult>(input.clone())?;
        assert_eq!(got.get_property("retries"), Some(&json!(3)));
        assert_eq!(got.get_property("missing"), None);
        assert_eq!(got.properties().len(), 2);
        assert_eq!(serde_json::to_value(&got)?, input);

        let estimate = GetCostEstimateResponse::new().set_properties(JsonObject::from_iter([(
            "totalMonthlyCost".to_string(),
            json!("12.50"),
        )]));
        assert_eq!(
            serde_json::to_value(&estimate)?,
            json!({"totalMonthlyCost": "12.50"})
        );
        Ok(())
    }

    #[test]
    fn pulsar_event_extra_fields() -> TestResult {
        let input = json!({
            "event_type": "create",
            "timestamp": "2024-01-01T00:00:00Z",
            "publisher": "catalog",
            "account_id": "acct-1",
            "version": "v1",
            "event_id": "e-1",
            "custom": {"a": 1}
        });
        let got = serde_json::from_value::<PulsarEventItems>(input.clone())?;
        assert_eq!(got.event_type, "create");
        assert_eq!(got.event_id.as_deref(), Some("e-1"));
        assert_eq!(got.get_property("custom"), Some(&json!({"a": 1})));
        assert_eq!(got.properties().len(), 1);
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test_case(json!({"limit": 10, "total_count": 0, "first": {"href": "https://x/v1/projects"}}), None; "last page")]
    #[test_case(json!({"next": {"href": "https://x/v1/projects?start=ignored", "start": "abc-123"}}), Some("abc-123"); "next start")]
    #[test_case(json!({"next": {"href": "https://x/v1/projects?limit=1&start=a%2Bb+c"}}), Some("a+b c"); "from href")]
    #[test_case(json!({"next": {"href": "https://x/v1/projects?limit=1"}}), None; "href without start")]
    #[test_case(json!({"next": {"href": "https://x/v1/projects", "start": ""}}), None; "empty start")]
    fn next_start(input: serde_json::Value, want: Option<&str>) -> TestResult {
        let page = serde_json::from_value::<ProjectListResponseSchema>(input)?;
        assert_eq!(page.get_next_start().as_deref(), want);
        Ok(())
    }

    #[test]
    fn request_body_fields() -> TestResult {
        let request = CreateConfigRequest::new()
            .set_id("project-1")
            .set_new_id("cfg-1")
            .set_new_name("vpc")
            .set_new_locator_id("locator")
            .set_new_setting([ConfigSettingItems::new().set_name("k").set_value("v")]);
        let got = serde_json::to_value(&request)?;
        let want = json!({
            "id": "cfg-1",
            "name": "vpc",
            "locator_id": "locator",
            "setting": [{"name": "k", "value": "v"}]
        });
        assert_eq!(got, want);

        let request = CreateProjectRequest::new()
            .set_name("p")
            .set_resource_group("Default")
            .set_location("us-south");
        assert_eq!(serde_json::to_value(&request)?, json!({"name": "p"}));
        Ok(())
    }

    #[test]
    fn response_defaults() -> TestResult {
        let got = serde_json::from_value::<GetProjectResponse>(json!({
            "id": "p-1",
            "configs": [{"name": "c", "type": "manual"}],
            "metadata": {"state": "ready", "cumulative_needs_attention_view": [{"event": "e"}]},
            "unknown": true
        }))?;
        assert_eq!(got.name, "");
        assert_eq!(got.id.as_deref(), Some("p-1"));
        assert_eq!(got.configs.len(), 1);
        let metadata = got.metadata.unwrap_or_default();
        assert_eq!(metadata.state.as_deref(), Some("ready"));
        assert_eq!(metadata.cumulative_needs_attention_view[0].event.as_deref(), Some("e"));
        Ok(())
    }

    #[test]
    fn create_config_request_setters() {
        let got = CreateConfigRequest::new()
            .set_id("p-1")
            .set_new_name("vpc")
            .set_new_locator_id("1082e7d2.5e2f0d4f-version")
            .set_new_id("cfg-1")
            .set_new_labels(["env:prod", "team:net"])
            .set_new_description("the network")
            .set_new_input([InputVariableInput::new().set_name("region")])
            .set_new_setting([ConfigSettingItems::new().set_name("k").set_value("v")]);
        assert_eq!(got.id, "p-1");
        assert_eq!(got.new_name, "vpc");
        assert_eq!(got.new_locator_id, "1082e7d2.5e2f0d4f-version");
        assert_eq!(got.new_id.as_deref(), Some("cfg-1"));
        assert_eq!(got.new_labels, vec!["env:prod".to_string(), "team:net".to_string()]);
        assert_eq!(got.new_description.as_deref(), Some("the network"));
        assert_eq!(got.new_input, vec![InputVariableInput::new().set_name("region")]);
        assert_eq!(got.new_setting, vec![ConfigSettingItems::new().set_name("k").set_value("v")]);

        let cleared = got
            .set_or_clear_new_id(None::<String>)
            .set_or_clear_new_description(None::<String>);
        assert_eq!(cleared.new_id, None);
        assert_eq!(cleared.new_description, None);
    }

    #[test]
    fn replace_service_instance_request_setters() {
        let parameters = json!({"region": "us-south"})
            .as_object()
            .cloned()
            .unwrap_or_default();
        let got = ReplaceServiceInstanceRequest::new()
            .set_instance_id("inst-1")
            .set_service_id("svc-1")
            .set_plan_id("plan-1")
            .set_context(["ctx"])
            .set_parameters(parameters.clone())
            .set_previous_values(["prev"])
            .set_x_broker_api_version("1.0")
            .set_x_broker_api_originating_identity("ibmcloud aWJtaWQ=")
            .set_accepts_incomplete(true);
        assert_eq!(got.instance_id, "inst-1");
        assert_eq!(got.service_id, "svc-1");
        assert_eq!(got.plan_id, "plan-1");
        assert_eq!(got.context, vec!["ctx".to_string()]);
        assert_eq!(got.parameters, Some(parameters));
        assert_eq!(got.previous_values, vec!["prev".to_string()]);
        assert_eq!(got.x_broker_api_version.as_deref(), Some("1.0"));
        assert_eq!(
            got.x_broker_api_originating_identity.as_deref(),
            Some("ibmcloud aWJtaWQ=")
        );
        assert_eq!(got.accepts_incomplete, Some(true));
    }

    #[test]
    fn paging_request_setters() {
        let got = ListProjectsRequest::new()
            .set_start("abc")
            .set_limit(20)
            .set_complete(false);
        assert_eq!(got.start.as_deref(), Some("abc"));
        assert_eq!(got.limit, Some(20));
        assert_eq!(got.complete, Some(false));

        let got = GetSchematicsJobRequest::new()
            .set_id("p-1")
            .set_config_id("cfg-1")
            .set_action(job_action::PLAN)
            .set_since(1_700_000_000_i64);
        assert_eq!(got.id, "p-1");
        assert_eq!(got.config_id, "cfg-1");
        assert_eq!(got.action, "plan");
        assert_eq!(got.since, Some(1_700_000_000));
    }
}
