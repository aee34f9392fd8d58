use anyhow::Result;
use companies_core::{
    EnumeratedField, FieldType, HiringStatus, RemotePolicy, VisaSponsorship,
    LOCATION_REQUIRED_FIELDS, OPTIONAL_FIELDS, REQUIRED_FIELDS,
};
use serde_json::{json, Map, Value};
use std::process::ExitCode;
use tracing::info;

pub fn execute(format: &str) -> Result<ExitCode> {
    info!("Printing record schema");

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&schema_json())?),
        _ => print_text_schema(),
    }

    Ok(ExitCode::SUCCESS)
}

fn print_text_schema() {
    println!("\nRecord Schema:");
    println!("  Required fields:");
    print_fields(REQUIRED_FIELDS);
    println!("  Optional fields:");
    print_fields(OPTIONAL_FIELDS);
    println!("  Location fields:");
    print_fields(LOCATION_REQUIRED_FIELDS);

    println!("\nAllowed Values:");
    print_enum::<VisaSponsorship>();
    print_enum::<RemotePolicy>();
    print_enum::<HiringStatus>();

    println!("\nRules:");
    println!("  careers_url   starts with http or https");
    println!("  locations     non-empty, exactly one with is_hq = true");
    println!("  tech_stack    non-empty list");
    println!("  last_updated  YYYY-MM-DD, not in the future");
    println!("  name and careers_url are unique (case-insensitive, trimmed)");
}

fn print_fields(fields: &[(&str, FieldType)]) {
    for (name, ty) in fields {
        println!("    {:<18} {}", name, ty);
    }
}

fn print_enum<T: EnumeratedField>() {
    println!("  {:<18} {}", T::FIELD, T::allowed_list());
}

fn fields_json(fields: &[(&str, FieldType)]) -> Value {
    let map: Map<String, Value> = fields
        .iter()
        .map(|(name, ty)| (name.to_string(), Value::from(ty.name())))
        .collect();
    Value::Object(map)
}

fn schema_json() -> Value {
    json!({
        "required_fields": fields_json(REQUIRED_FIELDS),
        "optional_fields": fields_json(OPTIONAL_FIELDS),
        "location_fields": fields_json(LOCATION_REQUIRED_FIELDS),
        "allowed_values": {
            (VisaSponsorship::FIELD): VisaSponsorship::allowed_values(),
            (RemotePolicy::FIELD): RemotePolicy::allowed_values(),
            (HiringStatus::FIELD): HiringStatus::allowed_values(),
        }
    })
}
