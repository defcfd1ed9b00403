use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("siteaudit")
        .version("1.0.0")
        .author("Siteaudit Contributors")
        .about("Audit the marketing effectiveness of web pages")
        .arg(clap::arg!(<URL> "URL of the page to audit"))
        .arg(clap::arg!(--json "Print the report as raw JSON instead of styled text"))
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout for the page fetch in seconds").default_value("10"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for the page fetch").value_name("UA"))
        .arg(clap::arg!(--model <MODEL> "Model identifier for the analysis call").default_value("gemini-2.5-flash"))
        .arg(clap::arg!(--"model-timeout" <SECS> "Timeout for the analysis call in seconds").default_value("30"))
        .arg(
            clap::arg!(--"max-chars" <NUM> "Maximum number of characters of page text sent to the model")
                .default_value("4000"),
        )
        .arg(clap::arg!(-v --verbose "Enable verbose progress output"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "siteaudit", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "siteaudit", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "siteaudit", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "siteaudit", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
