use serde_json::Value;

/// The result of evaluating a relative JSON pointer.
///
/// A suffix terminal lands on a value in the document. The `#` terminal
/// instead yields the name of the reached location: a key when its parent
/// is an object, an index when its parent is an array.
///
/// # Examples
///
/// ```
/// use jsonptr::Resolved;
/// use serde_json::json;
///
/// let doc = json!(true);
/// assert_eq!(Resolved::Value(&doc).to_json(), json!(true));
/// assert_eq!(Resolved::Key("foo".to_string()).to_json(), json!("foo"));
/// assert_eq!(Resolved::Index(2).to_json(), json!(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<'a> {
    /// Value borrowed from the document
    Value(&'a Value),

    /// Member name within the parent object
    Key(String),

    /// Element index within the parent array
    Index(i64),
}

impl<'a> Resolved<'a> {
    pub fn as_value(&self) -> Option<&'a Value> {
        match self {
            Resolved::Value(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_key(&self) -> Option<&str> {
        match self {
            Resolved::Key(k) => Some(k.as_str()),
            _ => None,
        }
    }

    pub fn as_index(&self) -> Option<i64> {
        match self {
            Resolved::Index(i) => Some(*i),
            _ => None,
        }
    }

    /// Owned JSON form: keys become strings, indices numbers.
    pub fn to_json(&self) -> Value {
        match self {
            Resolved::Value(v) => (*v).clone(),
            Resolved::Key(k) => Value::String(k.clone()),
            Resolved::Index(i) => Value::from(*i),
        }
    }
}

/// Returns a human-readable type name for a JSON value
pub fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
