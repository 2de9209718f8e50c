use approx::assert_abs_diff_eq;
use cart_tree::data::dataset::Dataset;
use cart_tree::data::loader::{load_csv, LoadOptions};
use cart_tree::report::export_html;
use cart_tree::trees::builder::build_tree;
use cart_tree::trees::classifier::DecisionTreeClassifier;
use cart_tree::trees::node::TreeNode;
use std::fs;
use std::path::PathBuf;

fn toy_dataset() -> Dataset<f64, f64> {
    Dataset::from_rows(&[
        vec![2.771244718, 1.784783929, 0.0],
        vec![1.728571309, 1.169761413, 0.0],
        vec![3.678319846, 2.81281357, 0.0],
        vec![3.961043357, 2.61995032, 0.0],
        vec![2.999208922, 2.209014212, 0.0],
        vec![7.497545867, 3.162953546, 1.0],
        vec![9.00220326, 3.339047188, 1.0],
        vec![7.444542326, 0.476683375, 1.0],
        vec![10.12493903, 3.234550982, 1.0],
        vec![6.642287351, 3.319983761, 1.0],
    ])
    .unwrap()
}

const IRIS_SAMPLE: &str = "\
sepal_length,sepal_width,petal_length,petal_width,class
5.1,3.5,1.4,0.2,0
4.9,3.0,1.4,0.2,0
4.7,3.2,1.3,0.2,0
5.0,3.6,1.4,0.2,0
5.4,3.9,1.7,0.4,0
7.0,3.2,4.7,1.4,1
6.4,3.2,4.5,1.5,1
6.9,3.1,4.9,1.5,1
5.5,2.3,4.0,1.3,1
6.5,2.8,4.6,1.5,1
6.3,3.3,6.0,2.5,2
5.8,2.7,5.1,1.9,2
7.1,3.0,5.9,2.1,2
6.3,2.9,5.6,1.8,2
6.5,3.0,5.8,2.2,2
";

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cart_tree_it_{}_{}", std::process::id(), name))
}

#[test]
fn root_splits_first_feature_near_6_64() {
    for max_depth in 2..5 {
        let tree = build_tree(&toy_dataset(), max_depth, 1).unwrap();
        match tree {
            TreeNode::Internal {
                feature_index,
                threshold,
                ..
            } => {
                assert_eq!(feature_index, 0);
                assert_abs_diff_eq!(threshold, 6.64, epsilon = 1e-2);
            }
            TreeNode::Terminal { .. } => panic!("root should be a split"),
        }
    }
}

#[test]
fn toy_dataset_is_classified_correctly() {
    let dataset = toy_dataset();
    let tree = build_tree(&dataset, 3, 1).unwrap();

    for row in dataset.to_rows() {
        let (features, label) = row.split_at(row.len() - 1);
        assert_eq!(tree.predict(features), label[0]);
    }
}

#[test]
fn concurrent_predictions_share_one_tree() {
    let dataset = toy_dataset();
    let tree = build_tree(&dataset, 3, 1).unwrap();
    let rows = dataset.to_rows();

    std::thread::scope(|scope| {
        for row in &rows {
            let tree = &tree;
            scope.spawn(move || {
                let (features, label) = row.split_at(row.len() - 1);
                assert_eq!(tree.predict(features), label[0]);
            });
        }
    });
}

#[test]
fn iris_csv_to_html_report() {
    let data = temp_path("iris.csv");
    let template = temp_path("template.html");
    let output = temp_path("report.html");
    fs::write(&data, IRIS_SAMPLE).unwrap();
    fs::write(&template, "<script>var tree = {{tree}};</script>").unwrap();

    let loaded = load_csv(&data, &LoadOptions::default()).unwrap();
    let feature_names = loaded.feature_names.unwrap();
    let mut classifier = DecisionTreeClassifier::with_params(Some(4), Some(1))
        .unwrap()
        .with_feature_names(feature_names);
    classifier.fit(&loaded.dataset).unwrap();

    let predictions = classifier.predict(&loaded.dataset.x).unwrap();
    assert_eq!(predictions, loaded.dataset.y);

    export_html(
        classifier.root().unwrap(),
        classifier.feature_names(),
        &template,
        &output,
    )
    .unwrap();
    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("petal_length \\u003c "));
    assert!(!html.contains("{{tree}}"));

    for path in [data, template, output] {
        fs::remove_file(path).unwrap();
    }
}
