//! Embedded browser assets. The whole UI ships inside the binary; the
//! only external assets are the Leaflet CDN files and the tile servers.

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>UrbanEye</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
  <link rel="stylesheet" href="/style.css">
</head>
<body>
  <nav class="navbar">
    <div class="navbar-title">UrbanEye</div>
    <div class="search-container">
      <input id="search-input" type="text" placeholder="Search city..." aria-label="Search city">
      <button id="search-btn" aria-label="Search" title="Search">&#128269;</button>
    </div>
  </nav>

  <main class="main-content" role="main">
    <aside class="results-panel" aria-label="Search results">
      <p id="status" class="status" hidden></p>
      <ul id="results-list" class="results-list"></ul>
    </aside>

    <section class="map-panel" aria-label="Map with city location">
      <div class="map-controls" aria-label="Map view controls">
        <button id="street-btn" class="active" aria-pressed="true" title="Street View">Street</button>
        <button id="satellite-btn" aria-pressed="false" title="Satellite View">Satellite</button>
      </div>
      <div id="map" aria-label="City map"></div>
      <div id="info-card" class="info-card" aria-live="polite" aria-atomic="true" hidden>
        <button id="close-info" class="close-info-btn" aria-label="Close city info">&times;</button>
        <h2 id="info-title"></h2>
        <div id="info-rows"></div>
      </div>
    </section>
  </main>

  <footer aria-label="Footer">
    <span>&copy; <span id="year"></span></span>
    <span>UrbanEye</span>
  </footer>

  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
  <script src="/app.js"></script>
</body>
</html>
"##;

pub const STYLE_CSS: &str = r##"body, html {
  margin: 0;
  height: 100%;
  font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
  background: #f7f9fc;
  color: #222;
  display: flex;
  flex-direction: column;
  overflow: hidden;
}

.navbar {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 0 20px;
  height: 56px;
  border-bottom: 1px solid #ccc;
  flex-shrink: 0;
  background: #fff;
}
.navbar-title {
  font-weight: bold;
  font-size: 1.4rem;
}
.search-container {
  position: relative;
  width: 240px;
}
.search-container input {
  width: 75%;
  padding: 8px 36px 8px 12px;
  border: 1px solid #333;
  border-radius: 30px;
  background: transparent;
  font-size: 1rem;
  outline: none;
  font-family: inherit;
}
.search-container button {
  position: absolute;
  right: 8px;
  top: 50%;
  transform: translateY(-50%);
  border: none;
  background: none;
  font-size: 1.1rem;
  cursor: pointer;
}

.main-content {
  flex: 1 1 auto;
  display: flex;
  gap: 20px;
  padding: 20px;
  height: calc(100vh - 56px - 44px);
  overflow: hidden;
}

.results-panel {
  flex-basis: 35%;
  background: #fff;
  border: 1px solid #ddd;
  border-radius: 10px;
  padding: 12px;
  overflow-y: auto;
}

.status {
  text-align: center;
  margin: 20px 0;
}
.status.error {
  color: #d9534f;
}

.results-list {
  list-style: none;
  padding: 0;
  margin: 0;
}
.city-card {
  padding: 12px;
  margin-bottom: 10px;
  border: 1px solid #ddd;
  border-radius: 8px;
  cursor: pointer;
  user-select: none;
  transition: background-color 0.2s, border-color 0.2s;
}
.city-card.selected {
  background: #e0f3ff;
  border-color: #0c0c0c;
}
.city-name {
  font-size: 1.1rem;
  font-weight: 600;
}
.city-region {
  font-size: 0.9rem;
  color: #3d3c3c;
  white-space: pre-line;
}

.map-panel {
  flex-grow: 1;
  position: relative;
  border: 1px solid #ddd;
  border-radius: 10px;
  overflow: hidden;
  display: flex;
  flex-direction: column;
}
#map {
  height: 100%;
  width: 100%;
}
.map-controls {
  position: absolute;
  top: 10px;
  right: 10px;
  z-index: 1000;
  display: flex;
  gap: 6px;
}
.map-controls button {
  padding: 6px 10px;
  border: 1px solid #e4e9ec;
  background: #fff;
  color: #5b5c5c;
  cursor: pointer;
  font-size: 0.9rem;
  border-radius: 4px;
  transition: background-color 0.2s, color 0.2s;
}
.map-controls button.active {
  background: #455565;
  color: #fff;
}
.map-controls button:hover:not(.active) {
  background: #e6f0ff;
}

.info-card {
  position: absolute;
  top: 20px;
  left: 20px;
  max-width: 320px;
  padding: 16px 36px 16px 16px;
  background: #fff;
  border: 1px solid #ddd;
  border-radius: 10px;
  z-index: 1000;
  box-shadow: 0 2px 8px rgba(0,0,0,0.1);
}
.info-card h2 {
  margin-top: 0;
  margin-bottom: 12px;
  font-size: 1.4rem;
}
.info-row {
  display: flex;
  justify-content: space-between;
  gap: 16px;
  margin-bottom: 8px;
}
.info-row .label {
  font-weight: 500;
}
.info-row .value {
  font-weight: 600;
  text-align: right;
}
.close-info-btn {
  position: absolute;
  top: 10px;
  right: 10px;
  background: none;
  border: none;
  font-size: 1.2rem;
  cursor: pointer;
}
.close-info-btn:hover {
  color: #fb0026;
}

footer {
  text-align: center;
  padding: 12px 0;
  font-weight: 600;
  font-size: 1rem;
  user-select: none;
  letter-spacing: 1.5px;
  border-top: 1px solid #b5abab;
  display: flex;
  justify-content: center;
  align-items: center;
  gap: 8px;
  flex-shrink: 0;
  height: 20px;
}

@media (max-width: 768px) {
  .main-content {
    flex-direction: column;
    height: auto;
    padding: 10px;
  }
  .results-panel {
    flex-basis: auto;
    height: 220px;
    margin-bottom: 12px;
  }
  .map-panel {
    height: 400px;
  }
  .info-card {
    position: static;
    max-width: 100%;
    margin-top: 12px;
    box-shadow: none;
  }
  .map-controls {
    top: auto;
    bottom: 10px;
    right: 10px;
  }
}
"##;

pub const APP_JS: &str = r##"// UrbanEye browser client. Talks to /api/search and /api/layers.
(function () {
  "use strict";

  delete L.Icon.Default.prototype._getIconUrl;
  L.Icon.Default.mergeOptions({
    iconRetinaUrl: "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/images/marker-icon-2x.png",
    iconUrl: "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/images/marker-icon.png",
    shadowUrl: "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/images/marker-shadow.png",
  });

  var input = document.getElementById("search-input");
  var searchBtn = document.getElementById("search-btn");
  var statusEl = document.getElementById("status");
  var listEl = document.getElementById("results-list");
  var infoCard = document.getElementById("info-card");
  var infoTitle = document.getElementById("info-title");
  var infoRows = document.getElementById("info-rows");
  var streetBtn = document.getElementById("street-btn");
  var satelliteBtn = document.getElementById("satellite-btn");

  var map = null;
  var marker = null;
  var tileLayers = [];
  var layerCache = {};
  var cityZoom = 11;
  var selected = null;

  function setStatus(text, isError) {
    statusEl.textContent = text;
    statusEl.classList.toggle("error", !!isError);
    statusEl.hidden = !text;
  }

  function fmtNumber(n) {
    if (!(n || n === 0)) return "N/A";
    return n.toLocaleString();
  }

  function cityLabel(city) {
    return city.country ? city.name + ", " + city.country : city.name;
  }

  function fetchLayers(style) {
    if (layerCache[style]) return Promise.resolve(layerCache[style]);
    return fetch("/api/layers?style=" + style)
      .then(function (res) { return res.json(); })
      .then(function (cfg) {
        layerCache[style] = cfg;
        return cfg;
      });
  }

  function applyStyle(style) {
    return fetchLayers(style).then(function (cfg) {
      tileLayers.forEach(function (layer) { map.removeLayer(layer); });
      tileLayers = cfg.layers.map(function (layer) {
        return L.tileLayer(layer.url_template, {
          attribution: layer.attribution,
          pane: layer.overlay ? "overlayPane" : "tilePane",
        }).addTo(map);
      });
      cityZoom = cfg.city_zoom;
      var street = style === "street";
      streetBtn.classList.toggle("active", street);
      satelliteBtn.classList.toggle("active", !street);
      streetBtn.setAttribute("aria-pressed", String(street));
      satelliteBtn.setAttribute("aria-pressed", String(!street));
    });
  }

  function clearSelection() {
    selected = null;
    infoCard.hidden = true;
    if (marker) {
      map.removeLayer(marker);
      marker = null;
    }
    Array.prototype.forEach.call(listEl.children, function (li) {
      li.classList.remove("selected");
      li.setAttribute("aria-pressed", "false");
    });
  }

  function infoRow(label, value) {
    var row = document.createElement("div");
    row.className = "info-row";
    var labelEl = document.createElement("div");
    labelEl.className = "label";
    labelEl.textContent = label;
    var valueEl = document.createElement("div");
    valueEl.className = "value";
    valueEl.textContent = value;
    row.appendChild(labelEl);
    row.appendChild(valueEl);
    return row;
  }

  function showInfo(city) {
    infoTitle.textContent = cityLabel(city);
    infoRows.textContent = "";
    infoRows.appendChild(infoRow("Region", city.admin1 || "N/A"));
    infoRows.appendChild(infoRow("Subregion", city.admin2 || "N/A"));
    infoRows.appendChild(infoRow("Coordinates",
      city.latitude.toFixed(4) + ", " + city.longitude.toFixed(4)));
    infoRows.appendChild(infoRow("Population", fmtNumber(city.population)));
    infoRows.appendChild(infoRow("Timezone", city.timezone || "N/A"));
    infoRows.appendChild(infoRow("Elevation",
      city.elevation !== null && city.elevation !== undefined ? city.elevation + " m" : "N/A"));
    infoCard.hidden = false;
  }

  function selectCity(city, card) {
    selected = city;
    Array.prototype.forEach.call(listEl.children, function (li) {
      var chosen = li === card;
      li.classList.toggle("selected", chosen);
      li.setAttribute("aria-pressed", String(chosen));
    });
    map.setView([city.latitude, city.longitude], cityZoom, { animate: true });
    if (marker) map.removeLayer(marker);
    marker = L.marker([city.latitude, city.longitude]).addTo(map);
    marker.bindPopup(cityLabel(city) + "<br>Population: " + fmtNumber(city.population));
    showInfo(city);
  }

  function renderResults(cities) {
    listEl.textContent = "";
    cities.forEach(function (city) {
      var li = document.createElement("li");
      li.className = "city-card";
      li.tabIndex = 0;
      li.setAttribute("role", "button");
      li.setAttribute("aria-pressed", "false");
      var name = document.createElement("div");
      name.className = "city-name";
      name.textContent = cityLabel(city);
      var region = document.createElement("div");
      region.className = "city-region";
      region.textContent =
        "Region: " + (city.admin1 || "N/A") + "\nSubregion: " + (city.admin2 || "N/A");
      li.appendChild(name);
      li.appendChild(region);
      li.addEventListener("click", function () { selectCity(city, li); });
      li.addEventListener("keydown", function (e) {
        if (e.key === "Enter" || e.key === " ") selectCity(city, li);
      });
      listEl.appendChild(li);
    });
  }

  function searchCity() {
    var query = input.value;
    clearSelection();
    renderResults([]);
    if (!query.trim()) {
      setStatus("Please enter a city name.", true);
      return;
    }
    setStatus("Loading...", false);
    searchBtn.disabled = true;
    fetch("/api/search?query=" + encodeURIComponent(query) + "&count=20")
      .then(function (res) {
        return res.json().then(function (body) { return { ok: res.ok, body: body }; });
      })
      .then(function (r) {
        if (!r.ok) {
          setStatus(r.body.error || "Failed to fetch.", true);
          return;
        }
        setStatus("", false);
        renderResults(r.body.results);
      })
      .catch(function (err) {
        setStatus("Failed to fetch: " + err.message, true);
      })
      .finally(function () {
        searchBtn.disabled = false;
      });
  }

  searchBtn.addEventListener("click", searchCity);
  input.addEventListener("keydown", function (e) {
    if (e.key === "Enter") searchCity();
  });
  document.getElementById("close-info").addEventListener("click", clearSelection);
  streetBtn.addEventListener("click", function () { applyStyle("street"); });
  satelliteBtn.addEventListener("click", function () { applyStyle("satellite"); });

  document.getElementById("year").textContent = new Date().getFullYear();

  fetchLayers("street").then(function (cfg) {
    map = L.map("map", { zoomControl: false })
      .setView([cfg.world.lat, cfg.world.lon], cfg.world.zoom);
    L.control.zoom({ position: "bottomright" }).addTo(map);
    return applyStyle("street");
  });
})();
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assets_are_wired_together() {
        assert!(INDEX_HTML.contains("href=\"/style.css\""));
        assert!(INDEX_HTML.contains("src=\"/app.js\""));
        assert!(APP_JS.contains("/api/search"));
        assert!(APP_JS.contains("/api/layers"));
    }

    #[test]
    fn test_page_has_both_status_messages() {
        assert!(APP_JS.contains("Please enter a city name."));
        assert!(APP_JS.contains("Loading..."));
    }

    #[test]
    fn test_css_covers_page_elements() {
        for class in [".city-card", ".info-card", ".map-controls", ".results-panel"] {
            assert!(STYLE_CSS.contains(class), "missing {}", class);
        }
    }
}
