use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy the sales fixture to OUT_DIR for include_str, falling back to a
    // tiny built-in data set so the app still builds without fixtures.
    let sales_src = Path::new("../fixtures/sales_history.csv");
    let sales_dest = Path::new(&out_dir).join("sales_history.csv");
    if sales_src.exists() {
        fs::copy(sales_src, &sales_dest).unwrap();
    } else {
        fs::write(
            &sales_dest,
            "id,year,city_name,amount\n1,2020,Boston,5\n2,2021,Boston,9\n3,2021,NYC,3\n",
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/sales_history.csv");
}
