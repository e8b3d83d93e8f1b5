use comfy_table::{ContentArrangement, Table};

use el_core::{EVENT_CATALOG, effect_for};

pub fn run(json: bool) -> Result<(), String> {
    if json {
        println!("{}", events_json()?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Event", "Power"]);

    for (i, description) in EVENT_CATALOG.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            description.to_string(),
            format!("{:+}", effect_for(description)),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} events, each equally likely", EVENT_CATALOG.len());

    Ok(())
}

fn events_json() -> Result<String, String> {
    let events: Vec<_> = EVENT_CATALOG
        .iter()
        .map(|description| {
            serde_json::json!({
                "description": description,
                "effect": effect_for(description),
            })
        })
        .collect();

    serde_json::to_string_pretty(&events).map_err(|e| format!("JSON serialization error: {e}"))
}
