use submarket_sniffer::{extract_overview_from_pages, DocumentId};

fn main() {
    env_logger::init();

    let pages = vec![
        "Dallas, TX 75201\n\
         Market Dallas-Fort Worth\n\
         Building Type 4 Star Office Subject Property\n\
         Class A\n\
         RBA 250,000 SF\n\
         Vacant 31,250 SF\n"
            .to_string(),
        "Submarket Cluster\n\
         Dallas-Fort Worth - Las Colinas 38 1,204,331 21.7%\n\
         Urban Center Submarket\n"
            .to_string(),
    ];

    let record = extract_overview_from_pages(&DocumentId::new("500 Commerce St"), &pages).unwrap();

    println!("Extracted overview for {:?}", record.get("address"));
    for (field, value) in record.fields() {
        println!("{}: {}", field, value.as_deref().unwrap_or(""));
    }
}
