//! Parse a handful of tag strings and print their canonical renderings.

use libstag::{encode_definitions, parse_struct, parse_tag, FieldTags, StructSchema};

fn main() {
    let tags = [
        "required,length(min=4, max=10)",
        "max=10,list=[apple, 'star fruits']",
        "pkr=[1, -100.009, aaa, bbb, -56]",
        r"abd='\r\n\''",
    ];

    for tag in tags {
        match parse_tag(tag, "example") {
            Ok(defs) => {
                println!("{}", tag);
                println!("  -> {}", encode_definitions(&defs));
                for def in &defs {
                    println!("     {} {:?}", def.name(), def.attributes());
                }
            }
            Err(e) => println!("{}\n  -> error: {}", tag, e),
        }
    }

    let schema = StructSchema::new("User")
        .field(FieldTags::new("Name").tag("validate", "required,length(min=4, max=10)"))
        .field(FieldTags::new("Age").tag("validate", "max=150"));

    match parse_struct(&schema, "validate") {
        Ok(by_field) => {
            let mut fields: Vec<&String> = by_field.keys().collect();
            fields.sort();
            for field in fields {
                println!("User.{}: {}", field, encode_definitions(&by_field[field]));
            }
        }
        Err(e) => println!("schema error: {}", e),
    }
}
