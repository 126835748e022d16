fn main() {
    let schema = aivss_assessment::schema();
    println!("{}", serde_json::to_string_pretty(&schema).unwrap());
}
