#![allow(dead_code)]

use beanmap::{Bean, Constructor, InvocationError, Method};

/// A record with the usual mix of accessors and near-misses.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoBean {
    pub id: Option<i32>,
    pub name: Option<String>,
    private_field: String,
}

impl Default for DemoBean {
    fn default() -> Self {
        DemoBean {
            id: None,
            name: None,
            private_field: "privateField".to_string(),
        }
    }
}

impl DemoBean {
    pub fn new(id: i32, name: &str) -> Self {
        DemoBean {
            id: Some(id),
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    pub fn from_parts(id: Option<i32>, name: Option<String>) -> Self {
        DemoBean {
            id,
            name,
            ..Default::default()
        }
    }

    /// Starts with `is` but returns an integer.
    pub fn isolate(&self) -> i32 {
        self.private_field.len() as i32
    }

    pub fn is_long_name(&self) -> Result<bool, InvocationError> {
        let name = self
            .name
            .as_ref()
            .ok_or_else(|| InvocationError::raised("name is null"))?;
        Ok(name.chars().count() > 10)
    }
}

impl Bean for DemoBean {
    fn methods() -> Vec<Method<Self>> {
        vec![
            Method::reader("isolate", |b: &DemoBean| b.isolate()),
            Method::reader("is", |_: &DemoBean| String::new()),
            Method::reader("getId", |b: &DemoBean| b.id),
            Method::writer("setId", |b: &mut DemoBean, id: Option<i32>| b.id = id),
            Method::reader("getName", |b: &DemoBean| b.name.clone()),
            Method::reader_with("getName", |b: &DemoBean, i: i32| {
                format!("{}{}", b.name.clone().unwrap_or_default(), i)
            }),
            Method::writer("setName", |b: &mut DemoBean, name: Option<String>| {
                b.name = name
            }),
            Method::try_reader("isLongName", DemoBean::is_long_name),
        ]
    }

    fn constructor() -> Option<Constructor<Self>> {
        Some(Constructor::default_ctor())
    }
}
