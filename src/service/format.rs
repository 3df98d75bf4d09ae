use std::collections::HashMap;
use log::debug;
use crate::models::resource::{IntermediateForm, ResourceType};
use crate::service::resource::ResourceFile;
use crate::service::traits::i_service::{FormatAdapter, FormatError};

/// 以內建資源函式庫實作的轉接器
pub struct ResourceAdapter {
    kind: ResourceType,
}

impl ResourceAdapter {
    pub fn new(kind: ResourceType) -> Self {
        ResourceAdapter { kind }
    }
}

impl FormatAdapter for ResourceAdapter {
    fn resource_type(&self) -> ResourceType {
        self.kind
    }

    fn decode(&self, data: &[u8]) -> Result<IntermediateForm, FormatError> {
        let resource = ResourceFile::load(self.kind, data).map_err(|e| {
            debug!("{} decode failed: {}", self.kind, e);
            FormatError::Unreadable
        })?;
        let xml = resource.to_xml().map_err(|e| {
            debug!("{} export failed: {}", self.kind, e);
            FormatError::Unreadable
        })?;
        Ok(IntermediateForm::new(xml))
    }

    fn encode(&self, form: &IntermediateForm) -> Result<Vec<u8>, FormatError> {
        debug!("Creating xml document");
        let resource = ResourceFile::from_xml(self.kind, form.as_str()).map_err(|e| {
            debug!("{} rebuild failed: {}", self.kind, e);
            FormatError::Unpackable
        })?;
        resource.save().map_err(|e| {
            debug!("{} save failed: {}", self.kind, e);
            FormatError::Unpackable
        })
    }
}

/// 資源類型到轉接器的對照表
pub struct AdapterRegistry {
    adapters: HashMap<ResourceType, Box<dyn FormatAdapter>>,
}

impl AdapterRegistry {
    pub fn empty() -> Self {
        AdapterRegistry { adapters: HashMap::new() }
    }

    /// 三種類型皆使用內建資源函式庫
    pub fn builtin() -> Self {
        ResourceType::ALL
            .into_iter()
            .fold(Self::empty(), |registry, kind| registry.with_adapter(Box::new(ResourceAdapter::new(kind))))
    }

    /// 註冊或取代某類型的轉接器
    pub fn with_adapter(mut self, adapter: Box<dyn FormatAdapter>) -> Self {
        self.adapters.insert(adapter.resource_type(), adapter);
        self
    }

    pub fn get(&self, kind: ResourceType) -> Option<&dyn FormatAdapter> {
        self.adapters.get(&kind).map(|a| &**a)
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(body: &[u8]) -> Vec<u8> {
        let mut data = b"RSC7".to_vec();
        data.extend_from_slice(&162u32.to_le_bytes());
        data.extend_from_slice(&[0u8; 8]);
        data.extend_from_slice(body);
        data
    }

    #[test]
    fn builtin_registry_covers_every_type() {
        let registry = AdapterRegistry::builtin();
        for kind in ResourceType::ALL {
            assert_eq!(registry.get(kind).map(|a| a.resource_type()), Some(kind));
        }
    }

    #[test]
    fn decode_then_encode_yields_bytes() {
        let adapter = ResourceAdapter::new(ResourceType::Yft);
        let form = adapter.decode(&container(b"fragment-data")).unwrap();
        assert!(!form.is_empty());
        let bytes = adapter.encode(&form).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn library_failures_collapse_per_stage() {
        let adapter = ResourceAdapter::new(ResourceType::Ydd);
        assert_eq!(adapter.decode(b"garbage").unwrap_err(), FormatError::Unreadable);
        let form = IntermediateForm::new("<Resource version=\"165\"/>".to_string());
        assert_eq!(adapter.encode(&form).unwrap_err(), FormatError::Unpackable);
        let form = IntermediateForm::new("not xml at all".to_string());
        assert_eq!(adapter.encode(&form).unwrap_err(), FormatError::Unpackable);
    }

    #[test]
    fn payload_of_another_type_is_not_packable() {
        let ydr = ResourceAdapter::new(ResourceType::Ydr);
        let form = ydr.decode(&container(b"drawable")).unwrap();
        let yft = ResourceAdapter::new(ResourceType::Yft);
        assert_eq!(yft.encode(&form).unwrap_err(), FormatError::Unpackable);
    }
}
