use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=tailwind.css");
    println!("cargo:rerun-if-changed=src/ui");
    println!("cargo:rerun-if-env-changed=MARQUEE_SKIP_TAILWIND");

    // The checked-in assets/tailwind.css is used as-is when generation is skipped or fails
    if std::env::var_os("MARQUEE_SKIP_TAILWIND").is_some() {
        return;
    }

    let output = Command::new("npx")
        .arg("@tailwindcss/cli")
        .args(["-i", "tailwind.css", "-o", "assets/tailwind.css", "--minify"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output();

    match output {
        Ok(output) if output.status.success() => {}
        Ok(output) => {
            println!("cargo:warning=Tailwind CSS generation failed, keeping existing stylesheet");
            println!(
                "cargo:warning=STDERR: {}",
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Err(e) => {
            println!("cargo:warning=Failed to run tailwindcss ({}), keeping existing stylesheet", e);
        }
    }
}
