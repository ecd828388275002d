//! Built-in dataset catalog.
//!
//! Entries are declarative: remote URIs, cache layout and citation metadata.
//! Decoding the fetched bytes into records is left to a caller-supplied
//! [`Decoder`](super::Decoder).

use super::info::DatasetInfo;
use super::source::{DatasetSource, RemoteFile};

const MNIST_BASE: &str = "https://storage.googleapis.com/cvdf-datasets/mnist";

const MNIST_CITATION: &str = r"@article{lecun2010mnist,
  title={MNIST handwritten digit database},
  author={LeCun, Yann and Cortes, Corinna and Burges, CJ},
  journal={ATT Labs [Online]. Available: http://yann.lecun.com/exdb/mnist},
  volume={2},
  year={2010}
}";

const UCI_CITATION: &str = r#"@misc{Dua:2019,
  author = "Dua, Dheeru and Graff, Casey",
  year = "2017",
  title = "{UCI} Machine Learning Repository",
  url = "http://archive.ics.uci.edu/ml",
  institution = "University of California, Irvine, School of Information and Computer Sciences"
}"#;

/// The MNIST database of handwritten digits. Train and test splits, each an
/// images file and a labels file (gzipped IDX).
#[must_use]
pub fn mnist() -> DatasetSource {
    let info = DatasetInfo::new(
        "mnist",
        "0.0.1",
        "The MNIST database of handwritten digits. 60000 train examples and \
         10000 test examples with image and label features.",
        "http://yann.lecun.com/exdb/mnist/",
    )
    .with_citation(MNIST_CITATION);

    DatasetSource::new("mnist", "mnist", info)
        .with_train(vec![
            RemoteFile::new(format!("{MNIST_BASE}/train-images-idx3-ubyte.gz"), "mnist_train_images"),
            RemoteFile::new(format!("{MNIST_BASE}/train-labels-idx1-ubyte.gz"), "mnist_train_labels"),
        ])
        .with_test(vec![
            RemoteFile::new(format!("{MNIST_BASE}/t10k-images-idx3-ubyte.gz"), "mnist_test_images"),
            RemoteFile::new(format!("{MNIST_BASE}/t10k-labels-idx1-ubyte.gz"), "mnist_test_labels"),
        ])
}

/// Fisher's Iris dataset: 150 records, 4 features, 3 classes. Train only.
#[must_use]
pub fn iris() -> DatasetSource {
    let info = DatasetInfo::new(
        "iris",
        "0.0.1",
        "Fisher's iris dataset: 3 classes of 50 instances each, where each \
         class refers to a type of iris plant.",
        "http://archive.ics.uci.edu/ml",
    )
    .with_citation(UCI_CITATION);

    DatasetSource::new("iris", "iris", info).with_train(vec![RemoteFile::new(
        "https://archive.ics.uci.edu/ml/machine-learning-databases/iris/iris.data",
        "iris.csv",
    )])
}

/// The Wisconsin breast cancer diagnostic dataset. Train only.
#[must_use]
pub fn breast_cancer() -> DatasetSource {
    let info = DatasetInfo::new(
        "breast-cancer",
        "0.0.1",
        "Features computed from a digitized image of a fine needle aspirate \
         of a breast mass, describing characteristics of the cell nuclei \
         present in the image.",
        "http://archive.ics.uci.edu/ml",
    )
    .with_citation(UCI_CITATION);

    DatasetSource::new("breast-cancer", "breast-cancer", info).with_train(vec![RemoteFile::new(
        "https://archive.ics.uci.edu/ml/machine-learning-databases/breast-cancer-wisconsin/breast-cancer-wisconsin.data",
        "breast-cancer.csv",
    )])
}

/// The UCI Adult census income dataset. Train only.
#[must_use]
pub fn adult() -> DatasetSource {
    let info = DatasetInfo::new(
        "adult-dataset",
        "0.0.1",
        "Census income data: predict whether income exceeds $50K/yr from \
         demographic features.",
        "http://archive.ics.uci.edu/ml",
    )
    .with_citation(UCI_CITATION);

    DatasetSource::new("adult-dataset", "adult-dataset", info).with_train(vec![RemoteFile::new(
        "http://archive.ics.uci.edu/ml/machine-learning-databases/adult/adult.data",
        "adult-dataset.csv",
    )])
}
