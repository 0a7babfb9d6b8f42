fn main() {
    // Embed Windows version metadata
    #[cfg(target_os = "windows")]
    {
        let mut res = winres::WindowsResource::new();
        res.set("FileDescription", "ThemeSwitch");
        res.set("ProductName", "ThemeSwitch");
        if let Err(e) = res.compile() {
            println!("cargo:warning=failed to embed Windows resources: {e}");
        }
    }
}
