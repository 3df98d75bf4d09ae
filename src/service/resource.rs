//! 內建的資源容器讀寫，只處理 RSC7 外層封裝。
//!
//! 容器由 16 位元組的小端序標頭與不透明的主體組成：
//!
//! | 位移 | 欄位             |
//! |------|------------------|
//! | 0    | magic `RSC7`     |
//! | 4    | version          |
//! | 8    | system flags     |
//! | 12   | graphics flags   |
//! | 16.. | body             |
//!
//! 中間格式為 XML，主體以 base64 文字存放在以資源頂層物件命名的元素中。

use std::io::{self, Cursor, Read, Write};

use base64::engine::general_purpose;
use base64::Engine;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use thiserror::Error;
use xml::reader::{EventReader, XmlEvent as ReadEvent};
use xml::writer::{EmitterConfig, XmlEvent as WriteEvent};

use crate::models::resource::ResourceType;

pub const RSC7_MAGIC: u32 = 0x3743_5352;
pub const HEADER_SIZE: usize = 16;
const ROOT_ELEMENT: &str = "Resource";

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("container is truncated ({0} bytes)")]
    Truncated(usize),

    #[error("invalid resource magic: {0:#010x}")]
    BadMagic(u32),

    #[error("resource body is empty")]
    EmptyBody,

    #[error("malformed xml: {0}")]
    Xml(String),

    #[error("missing '{0}' payload")]
    MissingPayload(&'static str),

    #[error("invalid attribute '{name}': {value}")]
    BadAttribute { name: &'static str, value: String },

    #[error("invalid payload encoding: {0}")]
    BadPayload(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFile {
    pub kind: ResourceType,
    pub version: u32,
    pub system_flags: u32,
    pub graphics_flags: u32,
    pub body: Vec<u8>,
}

impl ResourceFile {
    /// 讀取二進位容器
    pub fn load(kind: ResourceType, data: &[u8]) -> Result<Self, ResourceError> {
        if data.len() < HEADER_SIZE {
            return Err(ResourceError::Truncated(data.len()));
        }
        let mut cursor = Cursor::new(data);
        let magic = cursor.read_u32::<LittleEndian>()?;
        if magic != RSC7_MAGIC {
            return Err(ResourceError::BadMagic(magic));
        }
        let version = cursor.read_u32::<LittleEndian>()?;
        let system_flags = cursor.read_u32::<LittleEndian>()?;
        let graphics_flags = cursor.read_u32::<LittleEndian>()?;
        let mut body = Vec::with_capacity(data.len() - HEADER_SIZE);
        cursor.read_to_end(&mut body)?;
        if body.is_empty() {
            return Err(ResourceError::EmptyBody);
        }
        Ok(ResourceFile { kind, version, system_flags, graphics_flags, body })
    }

    /// 寫出二進位容器，標頭依目前欄位重新產生
    pub fn save(&self) -> Result<Vec<u8>, ResourceError> {
        if self.body.is_empty() {
            return Err(ResourceError::EmptyBody);
        }
        let mut out = Vec::with_capacity(HEADER_SIZE + self.body.len());
        out.write_u32::<LittleEndian>(RSC7_MAGIC)?;
        out.write_u32::<LittleEndian>(self.version)?;
        out.write_u32::<LittleEndian>(self.system_flags)?;
        out.write_u32::<LittleEndian>(self.graphics_flags)?;
        out.write_all(&self.body)?;
        Ok(out)
    }

    pub fn to_xml(&self) -> Result<String, ResourceError> {
        let mut buf = Vec::new();
        {
            let mut writer = EmitterConfig::new()
                .perform_indent(true)
                .create_writer(&mut buf);
            let version = self.version.to_string();
            let system_flags = format!("{:#010x}", self.system_flags);
            let graphics_flags = format!("{:#010x}", self.graphics_flags);
            let payload = general_purpose::STANDARD.encode(&self.body);

            writer.write(
                WriteEvent::start_element(ROOT_ELEMENT)
                    .attr("type", self.kind.extension())
                    .attr("version", &version)
                    .attr("systemFlags", &system_flags)
                    .attr("graphicsFlags", &graphics_flags),
            ).map_err(xml_write_error)?;
            writer.write(
                WriteEvent::start_element(self.kind.root_element()).attr("encoding", "base64"),
            ).map_err(xml_write_error)?;
            writer.write(WriteEvent::characters(&payload)).map_err(xml_write_error)?;
            writer.write(WriteEvent::end_element()).map_err(xml_write_error)?;
            writer.write(WriteEvent::end_element()).map_err(xml_write_error)?;
        }
        String::from_utf8(buf).map_err(|e| ResourceError::Xml(e.to_string()))
    }

    /// 由中間格式重建；缺少頂層物件即視為無法封裝
    pub fn from_xml(kind: ResourceType, xml: &str) -> Result<Self, ResourceError> {
        let payload_name = kind.root_element();
        let mut version = None;
        let mut system_flags = 0;
        let mut graphics_flags = 0;
        let mut payload: Option<String> = None;
        let mut in_payload = false;

        for event in EventReader::new(xml.as_bytes()) {
            match event.map_err(|e| ResourceError::Xml(e.to_string()))? {
                ReadEvent::StartElement { name, attributes, .. } => {
                    if name.local_name == ROOT_ELEMENT {
                        for attr in attributes {
                            match attr.name.local_name.as_str() {
                                "version" => version = Some(parse_u32("version", &attr.value)?),
                                "systemFlags" => system_flags = parse_u32("systemFlags", &attr.value)?,
                                "graphicsFlags" => graphics_flags = parse_u32("graphicsFlags", &attr.value)?,
                                _ => {}
                            }
                        }
                    } else if name.local_name == payload_name {
                        in_payload = true;
                        payload.get_or_insert_with(String::new);
                    }
                }
                ReadEvent::Characters(text) | ReadEvent::CData(text) if in_payload => {
                    if let Some(p) = payload.as_mut() {
                        p.push_str(text.trim());
                    }
                }
                ReadEvent::EndElement { name } if name.local_name == payload_name => {
                    in_payload = false;
                }
                _ => {}
            }
        }

        let payload = payload
            .filter(|p| !p.is_empty())
            .ok_or(ResourceError::MissingPayload(payload_name))?;
        let body = general_purpose::STANDARD
            .decode(payload.as_bytes())
            .map_err(|e| ResourceError::BadPayload(e.to_string()))?;
        if body.is_empty() {
            return Err(ResourceError::MissingPayload(payload_name));
        }
        let version = version.ok_or(ResourceError::BadAttribute {
            name: "version",
            value: String::new(),
        })?;

        Ok(ResourceFile { kind, version, system_flags, graphics_flags, body })
    }
}

fn parse_u32(name: &'static str, value: &str) -> Result<u32, ResourceError> {
    let value = value.trim();
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse::<u32>(),
    };
    parsed.map_err(|_| ResourceError::BadAttribute { name, value: value.to_string() })
}

fn xml_write_error(e: xml::writer::Error) -> ResourceError {
    ResourceError::Xml(e.to_string())
}
