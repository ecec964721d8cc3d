use jejusitemap::{
    args::parse_args,
    generate,
    io::{print_error, print_info, print_ok, print_warning},
    logging::init_logging,
};

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
    };
    init_logging(args.verbose);

    if args.verbose {
        print_info("Verbose mode enabled.");
        print_info(&format!("Scan root: {}", args.config.root.display()));
        print_info(&format!("Base URL: {}", args.config.base_url));
    }

    match generate(&args.config) {
        Ok(report) => {
            if report.count() == 0 {
                print_warning("No HTML pages found; wrote an empty sitemap.");
            }
            let name = report
                .output
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| report.output.display().to_string());
            print_ok(&format!("{} generated: {} urls", name, report.count()));
        }
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
