// If no sensor driver is selected, build both of them
fn main() {
    if !cfg!(feature = "ov2710") && !cfg!(feature = "ov9740") {
        println!("cargo:rustc-cfg=feature=\"ov2710\"");
        println!("cargo:rustc-cfg=feature=\"ov9740\"");
    }
}
