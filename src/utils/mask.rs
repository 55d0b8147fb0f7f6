use serde::Serialize;
use serde_json::Value;

/// Keep the last four characters, star out the rest.
pub fn mask(account: &str) -> String {
    let len = account.chars().count();
    if len > 4 {
        let tail: String = account.chars().skip(len - 4).collect();
        "*".repeat(len - 4) + &tail
    } else {
        account.to_string()
    }
}

/// Return true if a key name likely holds a bank account number.
fn is_account_key(key: &str) -> bool {
    let k = key.to_lowercase();
    k.contains("accountno") || k.contains("account_no") || k.contains("account_number")
}

/// JSON view of `v` with account numbers masked, for logging.
pub fn secure_serializable(v: impl Serialize) -> Value {
    match serde_json::to_value(v) {
        Ok(value) => secure_value(&value),
        Err(e) => Value::String(format!("<unserializable: {e}>")),
    }
}

pub fn secure_value(v: &Value) -> Value {
    match v {
        Value::Object(map) => {
            let mut new = serde_json::Map::with_capacity(map.len());
            for (k, val) in map {
                let new_val = match val {
                    Value::String(s) if is_account_key(k) => Value::String(mask(s)),
                    _ => secure_value(val),
                };
                new.insert(k.clone(), new_val);
            }
            Value::Object(new)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(secure_value).collect()),
        other => other.clone(),
    }
}
