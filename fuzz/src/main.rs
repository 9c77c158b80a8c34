#[macro_use]
extern crate afl;

fn main() {
    fuzz!(|data: &[u8]| {
        if let Ok(value) = cjson::parse(data) {
            // A successful parse must always re-serialize to something
            // that reparses to an equal tree.
            let text = cjson::serialize(&value);
            let reparsed = cjson::parse(text.as_bytes()).expect("serializer output always parses");
            assert!(value.eq_structural(&reparsed));
        }
    });
}
