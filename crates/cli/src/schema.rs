use versemap_core::model::Document;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let schema = schemars::schema_for!(Document);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
