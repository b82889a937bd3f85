fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let rows = [
        wktplot::Row::new("POINT(3 4)", "A", "#FF0000".parse().unwrap()),
        wktplot::Row::new(
            "LINESTRING(0 0,10 0,10 10)",
            "edge",
            "#0000FF".parse().unwrap(),
        ),
        wktplot::Row::new(
            "POLYGON((2 2,8 2,8 8,2 2))",
            "lot",
            "#00AA00".parse().unwrap(),
        ),
    ];

    let options = wktplot::PlotOptions::default();
    match wktplot::svg_document(&rows, &options, wktplot::IdSource::default()) {
        Ok(svg) => println!("{}", svg),
        Err(e) => eprintln!("Error: {}", e),
    }
}
