fn main() -> miette::Result<()> {
    sift::cli::run()
}
