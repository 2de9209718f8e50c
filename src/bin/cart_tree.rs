use cart_tree::data::dataset::Dataset;
use cart_tree::data::loader::{load_csv, load_features, LoadOptions};
use cart_tree::metrics::confusion::ClassificationMetrics;
use cart_tree::report::export_html;
use cart_tree::trees::classifier::DecisionTreeClassifier;
use clap::Parser;
use log::info;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Train a CART decision tree on a CSV file and report its accuracy.
///
/// The last column of DATA is the class label, all other columns (after the skipped
/// ones) are numeric features.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Training data
    data: PathBuf,

    /// Maximum depth of the tree, the root split being depth 1
    #[arg(long, default_value_t = 10)]
    max_depth: u16,

    /// Nodes with at most this many rows become leaves
    #[arg(long, default_value_t = 1)]
    min_size: usize,

    /// The first line holds data, not column names
    #[arg(long)]
    no_header: bool,

    /// Leading columns to ignore, e.g. an id column
    #[arg(long, default_value_t = 0)]
    skip_columns: usize,

    /// Train on this share of the rows and report accuracy on the rest as well
    #[arg(long)]
    train_size: Option<f64>,

    /// Seed for the train/test shuffle
    #[arg(long)]
    seed: Option<u64>,

    /// Print the tree as indented text
    #[arg(long)]
    print: bool,

    /// Write an HTML view of the tree to this file
    #[arg(long)]
    html: Option<PathBuf>,

    /// HTML template containing a {{tree}} placeholder
    #[arg(long, default_value = "templates/tree.html")]
    template: PathBuf,

    /// Unlabelled CSV to classify (same column layout as DATA minus the label)
    #[arg(long, requires = "predict_output")]
    predict: Option<PathBuf>,

    /// Where to write `Id,Prediction` rows for --predict
    #[arg(long)]
    predict_output: Option<PathBuf>,
}

fn report_accuracy(
    classifier: &DecisionTreeClassifier<f64, f64>,
    dataset: &Dataset<f64, f64>,
    name: &str,
) -> Result<f64, Box<dyn Error>> {
    let predictions = classifier.predict(&dataset.x)?;
    let accuracy = classifier.accuracy(&dataset.y, &predictions)?;
    println!("{} accuracy: {:.2}", name, accuracy);
    Ok(accuracy)
}

fn write_predictions(
    classifier: &DecisionTreeClassifier<f64, f64>,
    input: &Path,
    output: &Path,
    options: &LoadOptions,
) -> Result<(), Box<dyn Error>> {
    let loaded = load_features(input, options)?;
    let predictions = classifier.predict(&loaded.x)?;

    let mut writer = csv::Writer::from_path(output)?;
    writer.write_record(["Id", "Prediction"])?;
    for (id, prediction) in loaded.ids.iter().zip(predictions.iter()) {
        let prediction = prediction.to_string();
        writer.write_record([id.as_str(), prediction.as_str()])?;
    }
    writer.flush()?;
    info!(
        "Wrote {} predictions to {}",
        predictions.len(),
        output.display()
    );
    Ok(())
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let options = LoadOptions {
        has_headers: !args.no_header,
        skip_columns: args.skip_columns,
    };
    let loaded = load_csv(&args.data, &options)?;
    info!(
        "Loaded {} rows with {} features",
        loaded.dataset.nrows(),
        loaded.dataset.nfeatures()
    );

    let (train_dataset, test_dataset) = match args.train_size {
        Some(train_size) => {
            let (train, test) = loaded.dataset.train_test_split(train_size, args.seed)?;
            (train, Some(test))
        }
        None => (loaded.dataset, None),
    };

    let mut classifier =
        DecisionTreeClassifier::with_params(Some(args.max_depth), Some(args.min_size))?;
    if let Some(feature_names) = loaded.feature_names {
        classifier = classifier.with_feature_names(feature_names);
    }
    classifier.fit(&train_dataset)?;

    if args.print {
        print!("{}", classifier.render_text()?);
    }

    report_accuracy(&classifier, &train_dataset, "Training")?;
    if let Some(test_dataset) = test_dataset.filter(|test| test.nrows() > 0) {
        report_accuracy(&classifier, &test_dataset, "Test")?;
    }

    if let (Some(root), Some(output)) = (classifier.root(), &args.html) {
        export_html(root, classifier.feature_names(), &args.template, output)?;
    }

    if let (Some(input), Some(output)) = (&args.predict, &args.predict_output) {
        write_predictions(&classifier, input, output, &options)?;
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
