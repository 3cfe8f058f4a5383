fn main() -> anyhow::Result<()> {
    blog_app::run()
}
