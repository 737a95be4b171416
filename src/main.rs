use clap::Parser;
use northwind_queries::domain::ports::{ParamSource, ReportSink};
use northwind_queries::utils::{logger, validation::Validate};
use northwind_queries::{
    registry, CliConfig, ConsoleSink, Dataset, DirectorySink, ExerciseEngine, QueryParams, Result,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting northwind-queries CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if config.list {
        for exercise in registry() {
            println!("{:>4}  {}", exercise.title, exercise.description);
        }
        return Ok(());
    }

    let dataset = Dataset::embedded()?;
    let params = config.query_params()?;

    let outcome = match &config.output_path {
        Some(path) => run(
            dataset,
            params,
            &config.exercises,
            DirectorySink::new(path.clone()),
        ),
        None => run(dataset, params, &config.exercises, ConsoleSink),
    };

    match outcome {
        Ok(count) => {
            tracing::info!("✅ {} report(s) published", count);
        }
        Err(e) => {
            tracing::error!("❌ Exercise run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn run<S: ReportSink>(
    dataset: Dataset,
    params: QueryParams,
    titles: &[String],
    sink: S,
) -> Result<usize> {
    let mut engine = ExerciseEngine::new(dataset, params, sink);

    if titles.is_empty() {
        engine.run_all()
    } else {
        for title in titles {
            engine.run_one(title)?;
        }
        Ok(titles.len())
    }
}
