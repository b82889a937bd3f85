fn main() {
    let rows = [
        wktplot::Row::from_value("SRID=4326;POINT(13.4 52.5)", "Berlin", "#FF0000".parse().unwrap()),
        wktplot::Row::from_value("SRID=4326;POINT(2.35 48.85)", "Paris", "#0000FF".parse().unwrap()),
    ];

    match wktplot::web_map_script(&rows, &wktplot::PlotOptions::default()) {
        Ok(script) => println!("{}", script),
        Err(e) => eprintln!("Error: {}", e),
    }
}
