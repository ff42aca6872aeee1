use anyhow::Result;

use specdrift_lib::util::hash::name_hash;

use crate::output::print_json;

pub fn cmd_name_hash(value: &str, json: bool) -> Result<()> {
  let hash = name_hash(value);

  if json {
    print_json(&serde_json::json!({ "value": value, "hash": hash }))?;
  } else {
    println!("{}", hash);
  }

  Ok(())
}
