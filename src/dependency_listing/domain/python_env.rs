/// Python environment the pydep container is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonEnv {
    /// Base image of the pydep container
    pub base_image: String,
    /// Interpreter package installed in the image, e.g. `python2.7`
    pub python_version: String,
    /// Git ref of pydep to install
    pub pydep_version: String,
}

impl Default for PythonEnv {
    fn default() -> Self {
        Self {
            base_image: "ubuntu:14.04".to_string(),
            python_version: "python2.7".to_string(),
            pydep_version: "master".to_string(),
        }
    }
}

impl PythonEnv {
    /// Renders the Dockerfile of the image that provides `pydep-run.py`
    pub fn pydep_dockerfile(&self) -> String {
        format!(
            "FROM {base}\n\
             RUN apt-get update -qq && apt-get install -qqy curl git {python}\n\
             RUN ln -sf $(which {python}) /usr/bin/python\n\
             RUN curl -sSL https://bootstrap.pypa.io/pip/2.7/get-pip.py | python\n\
             RUN pip install git+https://github.com/sourcegraph/pydep.git@{pydep}\n",
            base = self.base_image,
            python = self.python_version,
            pydep = self.pydep_version,
        )
    }
}
