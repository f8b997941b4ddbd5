use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single toggleable feature within a category. The label doubles as the
/// stable dictionary key in [`Selections`].
#[derive(Debug, Clone, Serialize)]
pub struct OptionSpec {
    pub label: &'static str,
    pub tooltip: &'static str,
}

/// A named group of related options, rendered as one collapsible section.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySpec {
    pub key: &'static str,
    pub title: &'static str,
    pub options: &'static [OptionSpec],
}

const BASE_CONFIG: &[OptionSpec] = &[
    OptionSpec {
        label: "Common role (updates, packages, SSH hardening)",
        tooltip: "A foundational role that updates the OS, installs common utilities (e.g., curl, git, vim), and applies basic SSH security settings like disabling root login.",
    },
    OptionSpec {
        label: "Package Management Role (apt/dnf based on OS)",
        tooltip: "Installs and manages packages. Use variables to define package lists, e.g., a `base_packages` variable with ['htop', 'unzip', 'jq'].",
    },
    OptionSpec {
        label: "User management",
        tooltip: "Manages user accounts and permissions, e.g., creating a 'dev' group with sudo access or creating system users for running services.",
    },
    OptionSpec {
        label: "SSH key management",
        tooltip: "Manages authorized SSH keys for users to enable secure, passwordless access, e.g., distributing your public key to ~/.ssh/authorized_keys.",
    },
    OptionSpec {
        label: "Firewall configuration (UFW/firewalld)",
        tooltip: "Sets up the system firewall, e.g., allowing SSH (port 22) and restricting database ports to specific IPs.",
    },
    OptionSpec {
        label: "Time synchronization (chrony)",
        tooltip: "Ensures accurate system time by configuring the chrony service to sync with a time server pool like pool.ntp.org.",
    },
    OptionSpec {
        label: "NTP configuration",
        tooltip: "Alternative to chrony, configures the standard Network Time Protocol daemon for time synchronization, e.g., by managing /etc/ntp.conf.",
    },
    OptionSpec {
        label: "Log rotation",
        tooltip: "Configures logrotate to manage system log files, e.g., rotating /var/log/syslog weekly, keeping 4 archives, and compressing them.",
    },
    OptionSpec {
        label: "Security hardening (CIS benchmarks)",
        tooltip: "Applies security best practices from CIS benchmarks, e.g., disabling unused filesystems or configuring auditd for monitoring.",
    },
    OptionSpec {
        label: "SSL/TLS configuration",
        tooltip: "Configures SSL/TLS certificates for secure communication, e.g., generating self-signed certificates or deploying private CA-signed certs for internal services.",
    },
    OptionSpec {
        label: "SSH Host Key Checking",
        tooltip: "Enforces SSH host key checking to prevent man-in-the-middle (MITM) attacks. Highly recommended for security.",
    },
    OptionSpec {
        label: "Systemd Service Management",
        tooltip: "Manages systemd services, e.g., enabling and starting a custom service unit or ensuring a service is stopped.",
    },
    OptionSpec {
        label: "File system management (mounting, formatting)",
        tooltip: "Manages file systems, e.g., formatting a new disk with ext4 and mounting it to /data, or ensuring an NFS share is mounted at boot via /etc/fstab.",
    },
    OptionSpec {
        label: "User profile management (dotfiles, shell config)",
        tooltip: "Manages user-specific configurations, such as deploying custom dotfiles (e.g., .bashrc, .vimrc) from a Git repository to ensure a consistent shell environment.",
    },
];

const SERVICE_PLAYBOOKS: &[OptionSpec] = &[
    OptionSpec {
        label: "Web Server Role (Nginx/Apache)",
        tooltip: "Installs and configures a web server, e.g., setting up a virtual host for myapp.local with PHP-FPM.",
    },
    OptionSpec {
        label: "Docker installation and configuration",
        tooltip: "Installs Docker engine and Docker Compose, and adds users to the `docker` group for non-root access.",
    },
    OptionSpec {
        label: "Docker Compose deployments",
        tooltip: "Deploys containerized applications defined in a docker-compose.yml file. Ideal for multi-container services like Portainer or an ELK stack.",
    },
    OptionSpec {
        label: "Kubernetes (k3s) cluster setup",
        tooltip: "Deploys a lightweight k3s Kubernetes cluster, including setting up master/agent nodes and an ingress controller.",
    },
    OptionSpec {
        label: "Monitoring stack deployment (Prometheus/Grafana)",
        tooltip: "Sets up Prometheus and Grafana, e.g., configuring node_exporter on targets and creating a Grafana dashboard.",
    },
    OptionSpec {
        label: "DNS server (Pi-hole/AdGuard)",
        tooltip: "Installs a network-wide ad-blocking DNS server and configures local DNS records (e.g., grafana.homelab).",
    },
    OptionSpec {
        label: "Reverse proxy (Traefik/Nginx Proxy Manager)",
        tooltip: "Deploys a reverse proxy to manage traffic with automated SSL, e.g., routing plex.yourdomain.com to your Plex server.",
    },
    OptionSpec {
        label: "Certificate management (Let's Encrypt)",
        tooltip: "Automates obtaining and renewing SSL/TLS certificates and configures services to use them automatically.",
    },
    OptionSpec {
        label: "NFS server setup",
        tooltip: "Configures a Network File System (NFS) server, ideal for sharing directories across your network for things like media storage or persistent volumes for containers.",
    },
    OptionSpec {
        label: "Samba file sharing",
        tooltip: "Sets up a Samba server for Windows-compatible file sharing.",
    },
    OptionSpec {
        label: "DNS Record Management",
        tooltip: "Manages DNS records for homelab services, e.g., creating an A record for 'plex.homelab.local' pointing to a specific IP address.",
    },
];

const APP_DEPLOYMENTS: &[OptionSpec] = &[
    OptionSpec {
        label: "Media server (Plex/Jellyfin)",
        tooltip: "Deploys a media server in a Docker container, mounting media directories and configuring hardware transcoding.",
    },
    OptionSpec {
        label: "Home automation (Home Assistant)",
        tooltip: "Installs Home Assistant in Docker and securely exposes it to the internet via a reverse proxy.",
    },
    OptionSpec {
        label: "Photo management (Immich)",
        tooltip: "Deploys Immich, a self-hosted photo backup solution, using Docker Compose with all its required services.",
    },
    OptionSpec {
        label: "Password manager (Vaultwarden)",
        tooltip: "Sets up Vaultwarden, a lightweight, self-hosted Bitwarden-compatible password manager, and configures SMTP for emails.",
    },
    OptionSpec {
        label: "Git server (Gitea)",
        tooltip: "Deploys Gitea, a lightweight self-hosted Git service.",
    },
];

const AUTOMATION_FEATURES: &[OptionSpec] = &[
    OptionSpec {
        label: "Dynamic inventory (Proxmox plugin)",
        tooltip: "Configures Ansible to dynamically discover hosts from Proxmox based on guest properties, resource pools, or tags.",
    },
    OptionSpec {
        label: "Dynamic inventory (script-based)",
        tooltip: "Use a custom script (e.g., Python, Bash) to generate your inventory from any source like a CMDB, cloud API, or even a simple text file.",
    },
    OptionSpec {
        label: "Dynamic inventory (cloud provider)",
        tooltip: "Integrates with inventory plugins for cloud providers like AWS, Azure, or GCP to dynamically discover hosts based on tags or other metadata.",
    },
    OptionSpec {
        label: "Vault integration for secrets",
        tooltip: "Includes placeholders for Ansible Vault (e.g., {{ vault_db_password }}) to avoid committing secrets to version control.",
    },
    OptionSpec {
        label: "Ansible Vault UI integration",
        tooltip: "Provides guidance on integrating with a UI or centralized secret store like HashiCorp Vault or CyberArk.",
    },
    OptionSpec {
        label: "Tag-based execution",
        tooltip: "Structures the playbook with tags to run specific parts, e.g., `ansible-playbook site.yml --tags postgres` to only update databases.",
    },
    OptionSpec {
        label: "Check mode (dry-run) support",
        tooltip: "Ensures playbooks can be run with `--check` to safely validate your changes before applying them.",
    },
    OptionSpec {
        label: "Handlers for service restarts",
        tooltip: "Uses handlers to restart services only when their configuration changes, e.g., a handler to restart nginx only if its config is updated.",
    },
    OptionSpec {
        label: "Idempotent operations",
        tooltip: "Guarantees that running a playbook multiple times results in the same state, ensuring predictable and reliable automation.",
    },
    OptionSpec {
        label: "GitOps integration (Argo CD/Flux)",
        tooltip: "Prepares the playbook structure for GitOps tools like Argo CD or Flux, enabling automated deployments triggered by commits to a Git repository.",
    },
];

const TESTING: &[OptionSpec] = &[
    OptionSpec {
        label: "Molecule tests",
        tooltip: "Generates a Molecule framework to automate testing roles across different distributions and scenarios.",
    },
    OptionSpec {
        label: "Lint checks (ansible-lint)",
        tooltip: "Includes a configuration for ansible-lint to automatically check for bugs, stylistic issues, and bad practices.",
    },
    OptionSpec {
        label: "YAML syntax validation",
        tooltip: "Adds a basic script or pre-commit hook to validate YAML syntax and catch errors before runtime.",
    },
    OptionSpec {
        label: "Test environments (Vagrant/Docker)",
        tooltip: "Provides a Vagrantfile or Dockerfile to create consistent and reproducible environments for development and testing.",
    },
    OptionSpec {
        label: "Pre-commit hooks",
        tooltip: "Automates linting on commit. Sets up `.pre-commit-config.yaml` with hooks for `ansible-lint` and `yamllint`. You can easily add more hooks for tools like `prettier` (for Markdown) or `shellcheck` (for shell scripts).",
    },
];

const DOCUMENTATION: &[OptionSpec] = &[
    OptionSpec {
        label: "Playbook reference (README)",
        tooltip: "Generates a detailed README.md with a quick start guide, inventory setup instructions, and variable explanations.",
    },
    OptionSpec {
        label: "Role documentation",
        tooltip: "Creates separate README files within each role explaining its purpose, variables, dependencies, and an example.",
    },
    OptionSpec {
        label: "Variable reference",
        tooltip: "Generates a centralized document providing a single source of truth for all tunable parameters in your automation.",
    },
    OptionSpec {
        label: "Usage examples",
        tooltip: "Includes practical examples in the documentation, such as deploying a new application or performing routine maintenance.",
    },
    OptionSpec {
        label: "Best practices guide",
        tooltip: "Adds a section or file (e.g., CONTRIBUTING.md) with guidelines on code style to maintain a high-quality project.",
    },
];

const ADVANCED_CONFIGURATION: &[OptionSpec] = &[OptionSpec {
    label: "Custom Variables File",
    tooltip: "Allows users to specify a path to an external file for custom variables.",
}];

/// The process-wide option catalog. Configuration data, not computed state:
/// it never changes at runtime, and both the form and the prompt builder
/// iterate it in this declared order.
pub const CATALOG: &[CategorySpec] = &[
    CategorySpec {
        key: "base_config",
        title: "Base Configuration",
        options: BASE_CONFIG,
    },
    CategorySpec {
        key: "service_playbooks",
        title: "Service Playbooks",
        options: SERVICE_PLAYBOOKS,
    },
    CategorySpec {
        key: "app_deployments",
        title: "Application Deployments",
        options: APP_DEPLOYMENTS,
    },
    CategorySpec {
        key: "automation_features",
        title: "Automation Features",
        options: AUTOMATION_FEATURES,
    },
    CategorySpec {
        key: "testing",
        title: "Testing",
        options: TESTING,
    },
    CategorySpec {
        key: "documentation",
        title: "Documentation",
        options: DOCUMENTATION,
    },
    CategorySpec {
        key: "advanced_configuration",
        title: "Advanced Configuration",
        options: ADVANCED_CONFIGURATION,
    },
];

/// The complete set of boolean flags over every category/option pair.
///
/// Invariant: the structure mirrors [`CATALOG`] exactly, with every category
/// key and every option label present and nothing extra. [`Selections::for_catalog`]
/// establishes it; [`Selections::matches_catalog`] checks it at the trust
/// boundary before a generation runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selections(HashMap<String, HashMap<String, bool>>);

impl Selections {
    /// Project the catalog to all-false flags. Called once at UI startup.
    pub fn for_catalog() -> Self {
        let mut categories = HashMap::new();
        for category in CATALOG {
            let flags = category
                .options
                .iter()
                .map(|option| (option.label.to_string(), false))
                .collect();
            categories.insert(category.key.to_string(), flags);
        }
        Self(categories)
    }

    /// Flip a single flag. Unknown category/label pairs are ignored so the
    /// catalog-mirror invariant cannot be broken by a toggle.
    pub fn set(&mut self, category: &str, label: &str, value: bool) {
        if let Some(flags) = self.0.get_mut(category) {
            if let Some(flag) = flags.get_mut(label) {
                *flag = value;
            }
        }
    }

    pub fn is_selected(&self, category: &str, label: &str) -> bool {
        self.0
            .get(category)
            .and_then(|flags| flags.get(label))
            .copied()
            .unwrap_or(false)
    }

    pub fn any_selected(&self) -> bool {
        self.0
            .values()
            .any(|flags| flags.values().any(|selected| *selected))
    }

    /// Check the catalog-mirror invariant, naming the first mismatch.
    pub fn matches_catalog(&self) -> Result<(), String> {
        if self.0.len() != CATALOG.len() {
            return Err(format!(
                "expected {} categories, got {}",
                CATALOG.len(),
                self.0.len()
            ));
        }
        for category in CATALOG {
            let flags = self
                .0
                .get(category.key)
                .ok_or_else(|| format!("missing category '{}'", category.key))?;
            if flags.len() != category.options.len() {
                return Err(format!(
                    "category '{}' has {} options, expected {}",
                    category.key,
                    flags.len(),
                    category.options.len()
                ));
            }
            for option in category.options {
                if !flags.contains_key(option.label) {
                    return Err(format!(
                        "category '{}' is missing option '{}'",
                        category.key, option.label
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(CATALOG.len(), 7);
        let total: usize = CATALOG.iter().map(|c| c.options.len()).sum();
        assert_eq!(total, 51);
        // Keys and labels are dictionary keys: they must be unique.
        let mut keys = std::collections::HashSet::new();
        for category in CATALOG {
            assert!(keys.insert(category.key));
            let mut labels = std::collections::HashSet::new();
            for option in category.options {
                assert!(labels.insert(option.label), "duplicate: {}", option.label);
                assert!(!option.tooltip.is_empty());
            }
        }
    }

    #[test]
    fn test_for_catalog_is_all_false_and_well_formed() {
        let selections = Selections::for_catalog();
        assert!(selections.matches_catalog().is_ok());
        assert!(!selections.any_selected());
    }

    #[test]
    fn test_set_and_query() {
        let mut selections = Selections::for_catalog();
        selections.set("testing", "Molecule tests", true);
        assert!(selections.is_selected("testing", "Molecule tests"));
        assert!(selections.any_selected());
        selections.set("testing", "Molecule tests", false);
        assert!(!selections.any_selected());
    }

    #[test]
    fn test_set_ignores_unknown_keys() {
        let mut selections = Selections::for_catalog();
        selections.set("testing", "No such option", true);
        selections.set("no_such_category", "Molecule tests", true);
        assert!(!selections.any_selected());
        assert!(selections.matches_catalog().is_ok());
    }

    #[test]
    fn test_matches_catalog_rejects_missing_option() {
        let mut selections = Selections::for_catalog();
        selections.0.get_mut("testing").unwrap().remove("Molecule tests");
        assert!(selections.matches_catalog().is_err());
    }

    #[test]
    fn test_matches_catalog_rejects_extra_category() {
        let mut selections = Selections::for_catalog();
        selections
            .0
            .insert("extra".to_string(), HashMap::new());
        assert!(selections.matches_catalog().is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut selections = Selections::for_catalog();
        selections.set("base_config", "User management", true);
        let json = serde_json::to_string(&selections).unwrap();
        let back: Selections = serde_json::from_str(&json).unwrap();
        assert_eq!(back, selections);
        assert!(back.is_selected("base_config", "User management"));
    }
}
