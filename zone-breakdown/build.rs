use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("zone_details.json");

    // Copy the zone details snapshot to OUT_DIR for include_str.
    // A snapshot that does not parse is replaced by an empty one so the
    // app shows its no-data state instead of failing to build.
    let src = Path::new("../fixtures/zone_details_de.json");
    let snapshot = fs::read_to_string(src)
        .ok()
        .filter(|text| serde_json::from_str::<serde_json::Value>(text).is_ok());

    match snapshot {
        Some(text) => fs::write(&dest, text).unwrap(),
        None => fs::write(
            &dest,
            r#"{"zoneKey":"DE","hasData":false,"hasParser":true,"zoneStates":{}}"#,
        )
        .unwrap(),
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/zone_details_de.json");
}
